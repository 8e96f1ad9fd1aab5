use metro_planner::domain::Station;
use metro_planner::network::{SharedStationGraph, bangalore_sample};
use metro_planner::planner::{CyclePolicy, PathConfig};
use tracing_subscriber::EnvFilter;

/// Render a route as `[a, b, c]`.
fn format_route(route: &[Station]) -> String {
    let names: Vec<&str> = route.iter().map(Station::name).collect();
    format!("[{}]", names.join(", "))
}

#[tokio::main]
async fn main() {
    // Logging, filtered by RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Build the sample network behind a shared handle
    let sample = bangalore_sample();
    let network = SharedStationGraph::new(sample.graph);
    let source = sample.mg_road;
    let destination = sample.banashankari;

    // Print the adjacency list
    println!("Metro Network Adjacency List:");
    print!("{}", network.snapshot().await);

    // Shortest path (BFS)
    let shortest = network.shortest_path(&source, &destination).await;
    println!();
    println!(
        "Shortest Path from {source} to {destination} (BFS): {}",
        format_route(&shortest)
    );

    // Longest path (DFS); the default policy rejects cycles
    match network
        .longest_path_heuristic(&source, &PathConfig::default())
        .await
    {
        Ok(route) => println!("Longest Path from {source} (DFS): {}", format_route(&route)),
        Err(e) => println!("Longest Path from {source} (DFS): {e}"),
    }

    let lenient = PathConfig::new(PathConfig::default().max_depth, CyclePolicy::SkipInProgress);
    match network.longest_path_heuristic(&source, &lenient).await {
        Ok(route) => println!(
            "Longest Path from {source} (DFS, skipping back edges): {}",
            format_route(&route)
        ),
        Err(e) => println!("Longest Path from {source} (DFS, skipping back edges): {e}"),
    }

    // Add a new station
    let yeshwanthpur = Station::new("Yeshwanthpur");
    network
        .add_station(yeshwanthpur, vec![source.clone(), destination.clone()])
        .await;

    println!();
    println!("Updated Metro Network Adjacency List after adding Yeshwanthpur:");
    print!("{}", network.snapshot().await);

    // A freshly constructed station is a different station, whatever its name
    for station_to_delete in [Station::new("MG Road"), source] {
        println!();
        if network.station_exists(&station_to_delete).await {
            network.delete_station(&station_to_delete).await;
            println!("Updated Metro Network Adjacency List after deleting {station_to_delete}:");
            print!("{}", network.snapshot().await);
        } else {
            println!("Station {station_to_delete} does not exist in the network.");
        }
    }
}
