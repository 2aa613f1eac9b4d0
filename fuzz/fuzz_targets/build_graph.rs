#![no_main]

use graphiti_core::GraphBuilder;
use graphiti_core::adapters::{MemoryCapabilities, MemoryGraph};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(source) = MemoryGraph::from_json_str(text) else {
        return;
    };
    // Keep the quadratic matrix small.
    if source.nodes.len() > 64 {
        return;
    }

    let validation = GraphBuilder::new(MemoryCapabilities).build_lenient(&source, None);
    if let Some(mut graph) = validation.graph {
        graph.all_distances();
        let _ = graph.has_cycles();
        let _ = graph.groups();
        let _ = graph.to_string();
    }
});
