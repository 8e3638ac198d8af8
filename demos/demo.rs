//! Road network demo: find a route, block roads, re-route

use saferoute_core::{Engine, GraphError};

fn report(engine: &Engine, start: &str, end: &str) {
    match engine.shortest_path(start, end) {
        Ok(path) => println!("  Path: {}  (distance {})", path, path.total_weight()),
        Err(GraphError::NoPath(..)) => println!("  No safe path found."),
        Err(e) => println!("  Error: {}", e),
    }
}

fn main() {
    println!("=== SafeRoute Demo ===\n");

    let engine = Engine::new();
    for (a, b, w) in [("A", "B", 4), ("B", "C", 3), ("A", "C", 10)] {
        match engine.add_connection(a, b, w) {
            Ok(()) => println!("✓ Path added: {} ↔ {} (Distance: {})", a, b, w),
            Err(e) => println!("  Error: {}", e),
        }
    }
    println!();

    println!("Route A → C");
    report(&engine, "A", "C");

    println!("\nBlocking B-C");
    if let Err(e) = engine.remove_connection("B", "C") {
        println!("  Warning: {}", e);
    }
    report(&engine, "A", "C");

    println!("\nBlocking A-C");
    if let Err(e) = engine.remove_connection("A", "C") {
        println!("  Warning: {}", e);
    }
    report(&engine, "A", "C");

    println!("\nBlocking A-C again");
    if let Err(e) = engine.remove_connection("A", "C") {
        println!("  Warning: {}", e);
    }

    println!("\nRoute Z → C");
    report(&engine, "Z", "C");

    let snapshot = engine.snapshot();
    println!(
        "\nGraph: {} nodes, {} edges",
        snapshot.nodes.len(),
        snapshot.edges.len()
    );

    println!("\n=== Demo Complete ===");
}
