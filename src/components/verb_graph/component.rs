use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, error};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::render;
use super::state::ForceGraphState;
use crate::words::{GraphSession, LayoutConfig};

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}

fn sync_title(canvas_ref: NodeRef<leptos::html::Canvas>, state: &ForceGraphState) {
	let Some(canvas) = canvas_ref.get() else {
		return;
	};
	let canvas: HtmlCanvasElement = canvas.into();
	let _ = match state.tooltip() {
		Some(text) => canvas.set_attribute("title", &text),
		None => canvas.remove_attribute("title"),
	};
}

fn canvas_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Canvas showing one root and its derived verbs. Click a node to reveal its
/// translation; drag to move it.
#[component]
pub fn VerbGraphCanvas(
	#[prop(into)] session: Signal<Option<GraphSession>>,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<ForceGraphState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init) = (state.clone(), animate.clone());

	Effect::new(move |_| {
		let session = session.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		let defaults = LayoutConfig::default();
		let config = LayoutConfig {
			width: width.unwrap_or(defaults.width),
			height: height.unwrap_or(defaults.height),
			..defaults
		};
		canvas.set_width(config.width as u32);
		canvas.set_height(config.height as u32);

		// the old graph, and its tooltip, go before the new one is built
		state_init.borrow_mut().take();
		let _ = canvas.remove_attribute("title");
		if let Some(session) = session {
			debug!("Laying out {}", session.root());
			*state_init.borrow_mut() = Some(ForceGraphState::new(session, config));
		}

		if animate_init.borrow().is_some() {
			return;
		}
		let Some(ctx) = context_2d(&canvas) else {
			error!("Canvas has no 2d context");
			return;
		};
		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				render::render(s, &ctx);
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let (Some(win), Some(cb)) = (web_sys::window(), animate_init.borrow().as_ref()) {
			let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			if let Some(slot) = s.node_at_position(x, y) {
				s.begin_drag(slot, x, y);
			}
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if s.drag.slot.is_some() {
				s.drag_to(x, y);
				return;
			}
			let hovered = s.node_at_position(x, y);
			if s.set_hover(hovered) {
				sync_title(canvas_ref, s);
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.end_drag();
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.cancel_drag();
			s.set_hover(None);
			sync_title(canvas_ref, s);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="verb-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			style="display: block; cursor: pointer;"
		/>
	}
}
