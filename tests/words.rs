use std::cmp::Ordering;

use pretty_assertions::assert_eq;
use verb_graph::words::{
	Bounds, Dictionary, LayoutConfig, LinkClass, Viewer, WordError, build_graph, clamp_position,
	collate,
};

const BUNDLED: &str = include_str!("../data/verbs.json");

#[test]
fn bundled_document_loads_sorted() {
	let dict = Dictionary::parse(BUNDLED).unwrap();
	assert!(!dict.is_empty());
	for pair in dict.roots().windows(2) {
		assert_ne!(
			collate::compare(pair[0].german(), pair[1].german()),
			Ordering::Greater,
			"{} before {}",
			pair[0].german(),
			pair[1].german()
		);
	}
	// umlaut root sorts with the a's
	assert_eq!(dict.roots()[0].german(), "ändern");
}

#[test]
fn every_bundled_root_builds_a_star() {
	let dict = Dictionary::parse(BUNDLED).unwrap();
	for root in dict.roots() {
		let graph = build_graph(root);
		let n = root.children().len();
		assert_eq!(graph.nodes().len(), n + 1);
		assert_eq!(graph.links().len(), n);
		assert!(graph.nodes()[0].is_hub);
		assert!(graph.nodes()[1..].iter().all(|node| !node.is_hub));
		for link in graph.links() {
			let (hub, spoke) = (&graph.nodes()[link.hub], &graph.nodes()[link.spoke]);
			assert_eq!(link.separable, hub.separable || spoke.separable);
			assert_eq!(link.class, LinkClass::for_link(link.separable));
		}
	}
}

#[test]
fn fahren_example() {
	let raw = r#"[{"root": "fahren", "trans": "drive", "childWords": [
		{"verb": "abfahren", "trans": "depart", "separ": true},
		{"verb": "verfahren", "trans": "proceed", "separ": false}
	]}]"#;
	let dict = Dictionary::parse(raw).unwrap();
	let (nodes, links) = build_graph(&dict.roots()[0]).into_parts();

	let summary: Vec<_> = nodes
		.iter()
		.map(|n| (n.label.as_str(), n.is_hub, n.separable))
		.collect();
	assert_eq!(
		summary,
		[
			("fahren", true, false),
			("abfahren", false, true),
			("verfahren", false, false),
		]
	);
	assert_eq!(links.len(), 2);
	assert_eq!(links[0].class, LinkClass::Separable);
	assert!(links[0].class.dash().is_some());
	assert_eq!(links[1].class, LinkClass::Fused);
	assert!(links[1].class.dash().is_none());
	assert!(links[0].class.rest_length() > links[1].class.rest_length());
}

#[test]
fn two_roots_sort_alphabetically() {
	let raw = r#"[
		{"root": "gehen", "trans": "go", "childWords": []},
		{"root": "fahren", "trans": "drive", "childWords": []}
	]"#;
	let dict = Dictionary::parse(raw).unwrap();
	let names: Vec<_> = dict.roots().iter().map(|r| r.german()).collect();
	assert_eq!(names, ["fahren", "gehen"]);
}

#[test]
fn out_of_range_selection_is_recoverable() {
	let mut viewer = Viewer::new(Dictionary::parse(BUNDLED).unwrap());
	let len = viewer.dictionary().len();
	let before = viewer.session().map(|s| s.root().to_owned());

	let err = viewer.select_root(len).unwrap_err();
	assert!(matches!(err, WordError::EmptySelection { index, .. } if index == len));
	assert_eq!(viewer.session().map(|s| s.root().to_owned()), before);

	let sein = viewer.dictionary().position("sein").unwrap();
	viewer.select_root(sein).unwrap();
	let graph = viewer.session().unwrap().graph();
	assert_eq!((graph.nodes().len(), graph.links().len()), (1, 0));
}

#[test]
fn clamping_is_idempotent_and_contains_nodes() {
	let config = LayoutConfig::default();
	let bounds = Bounds {
		width: 400.0,
		height: 300.0,
	};
	for is_hub in [false, true] {
		let r = config.node_radius(is_hub);
		for p in [(-10.0, -10.0), (200.0, 150.0), (399.0, 1.0), (1e4, -1e4)] {
			let once = clamp_position(p, r, bounds);
			assert_eq!(clamp_position(once, r, bounds), once);
			assert!(once.0 - r >= 0.0 && once.0 + r <= bounds.width);
			assert!(once.1 - r >= 0.0 && once.1 + r <= bounds.height);
		}
	}
}
