//! Built-in sample network.

use crate::domain::Station;

use super::StationGraph;

/// The five-station Bangalore sample network and its station handles.
///
/// Handles are exposed so callers can query the graph by identity.
#[derive(Debug, Clone)]
pub struct SampleNetwork {
    pub graph: StationGraph,
    pub mg_road: Station,
    pub indiranagar: Station,
    pub jayanagar: Station,
    pub majestic: Station,
    pub banashankari: Station,
}

/// Build the Bangalore sample network.
///
/// Most connections are listed in both directions, but not all: Majestic lists
/// Indiranagar while Indiranagar does not list Majestic. Lists, in order:
///
/// ```text
/// MG Road      -> Indiranagar, Majestic
/// Indiranagar  -> MG Road, Jayanagar
/// Jayanagar    -> Indiranagar, Majestic, Banashankari
/// Majestic     -> MG Road, Indiranagar, Jayanagar
/// Banashankari -> Jayanagar
/// ```
pub fn bangalore_sample() -> SampleNetwork {
    let mg_road = Station::new("MG Road");
    let indiranagar = Station::new("Indiranagar");
    let jayanagar = Station::new("Jayanagar");
    let majestic = Station::new("Majestic");
    let banashankari = Station::new("Banashankari");

    let mut graph = StationGraph::new();
    graph.add_station(
        mg_road.clone(),
        vec![indiranagar.clone(), majestic.clone()],
    );
    graph.add_station(
        indiranagar.clone(),
        vec![mg_road.clone(), jayanagar.clone()],
    );
    graph.add_station(
        jayanagar.clone(),
        vec![indiranagar.clone(), majestic.clone(), banashankari.clone()],
    );
    graph.add_station(
        majestic.clone(),
        vec![mg_road.clone(), indiranagar.clone(), jayanagar.clone()],
    );
    graph.add_station(banashankari.clone(), vec![jayanagar.clone()]);

    SampleNetwork {
        graph,
        mg_road,
        indiranagar,
        jayanagar,
        majestic,
        banashankari,
    }
}
