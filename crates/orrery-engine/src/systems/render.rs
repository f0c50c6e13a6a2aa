use crate::components::node::Node;
use crate::components::visual::BlendMode;
use crate::renderer::instance::{NodeInstance, RenderBuffer};

/// Build the render buffer from a set of nodes.
/// Groups nodes by blend mode: normal first, then additive.
/// Sets `additive_split` at the boundary.
pub fn build_render_buffer<'a>(nodes: impl Iterator<Item = &'a Node>, buffer: &mut RenderBuffer) {
    buffer.clear();

    let mut normal: Vec<NodeInstance> = Vec::new();
    let mut additive: Vec<NodeInstance> = Vec::new();

    for node in nodes {
        if !node.active {
            continue;
        }

        let visual = match &node.visual {
            Some(v) => v,
            None => continue,
        };

        let material = &visual.material;
        let instance = NodeInstance {
            position: node.position.to_array(),
            rotation: node.rotation.to_array(),
            scale: node.scale.to_array(),
            kind: visual.shape.kind(),
            extent: visual.shape.extent(),
            color: material.color.to_array(),
            emissive: material.emission(),
            opacity: material.opacity,
            label: visual.shape.label().map_or(-1.0, |l| l.0 as f32),
        };

        match material.blend {
            BlendMode::Normal => normal.push(instance),
            BlendMode::Additive => additive.push(instance),
        }
    }

    let split = normal.len().min(buffer.capacity()) as u32;
    let total = normal.len() + additive.len();

    for inst in normal {
        buffer.push(inst);
    }
    buffer.set_additive_split(split);
    for inst in additive {
        buffer.push(inst);
    }

    if total > buffer.capacity() {
        log::warn!("render buffer full: {} nodes, capacity {}", total, buffer.capacity());
    }
}
