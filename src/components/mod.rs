pub mod verb_graph;
