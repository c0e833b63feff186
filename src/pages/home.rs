use leptos::prelude::*;
use log::warn;

use crate::components::verb_graph::VerbGraphCanvas;
use crate::words::{Dictionary, Viewer};

/// The verb document, bundled at build time.
const VERBS: &str = include_str!("../../data/verbs.json");

/// Root picker plus the graph for the picked root.
#[component]
fn VerbExplorer(viewer: Viewer) -> impl IntoView {
	let viewer = RwSignal::new(viewer);
	let session = Signal::derive(move || viewer.with(|v| v.session().cloned()));
	let selected = move || {
		viewer.with(|v| {
			v.session()
				.map(|s| s.root_index())
				.unwrap_or_default()
				.to_string()
		})
	};

	let options = viewer.with_untracked(|v| {
		v.dictionary()
			.roots()
			.iter()
			.enumerate()
			.map(|(i, root)| {
				view! { <option value=i.to_string()>{format!("{} ({})", root.german(), root.english())}</option> }
			})
			.collect_view()
	});
	let is_empty = viewer.with_untracked(|v| v.dictionary().is_empty());

	let on_change = move |ev: leptos::ev::Event| {
		let value = event_target_value(&ev);
		match value.parse::<usize>() {
			Ok(index) => {
				viewer.maybe_update(|v| v.select_root(index).is_ok());
			}
			Err(e) => warn!("Bad root index {value:?}: {e}"),
		}
	};

	if is_empty {
		return view! { <p>"No verbs loaded."</p> }.into_any();
	}

	view! {
		<div class="verb-graph">
			<label>
				"Root verb: "
				<select on:change=on_change prop:value=selected>
					{options}
				</select>
			</label>
			<VerbGraphCanvas session=session />
			<p class="subtitle">"Click a verb to see its translation. Drag to move it."</p>
		</div>
	}
	.into_any()
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let loaded = Dictionary::parse(VERBS).map(Viewer::new);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Could not load the verb list"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<h1>"German Verb Roots"</h1>
			{loaded.map(|viewer| view! { <VerbExplorer viewer=viewer /> })}
		</ErrorBoundary>
	}
}
