use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::ForceGraphState;

const LABEL_FONT: &str = "bold 14px sans-serif";

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let (w, h) = (state.config.width, state.config.height);
	ctx.set_fill_style_str("white");
	ctx.fill_rect(0.0, 0.0, w, h);
	ctx.set_stroke_style_str("black");
	ctx.set_line_width(1.0);
	ctx.stroke_rect(0.0, 0.0, w, h);
	draw_links(state, ctx);
	draw_nodes(state, ctx);
}

fn draw_links(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str("#999");
	state.graph.visit_edges(|n1, n2, edge| {
		let class = edge.user_data;
		ctx.set_line_width(class.stroke_width());
		let dash = match class.dash() {
			Some(d) => js_sys::Array::of2(&JsValue::from_f64(d), &JsValue::from_f64(d)),
			None => js_sys::Array::new(),
		};
		let _ = ctx.set_line_dash(&dash);

		ctx.begin_path();
		ctx.move_to(n1.x() as f64, n1.y() as f64);
		ctx.line_to(n2.x() as f64, n2.y() as f64);
		ctx.stroke();
	});
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_font(LABEL_FONT);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	state.graph.visit_nodes(|node| {
		let info = &node.data.user_data;
		let Some(word) = state.node(info.slot) else {
			return;
		};
		let (x, y) = (node.x() as f64, node.y() as f64);
		let frame = state.reveal_frame(info.slot);
		let (scale, opacity) = frame.map_or((1.0, 1.0), |f| (f.scale, f.opacity));

		ctx.set_global_alpha(opacity);
		ctx.begin_path();
		let _ = ctx.arc(x, y, info.radius * scale, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(info.color);
		ctx.fill();
		ctx.set_global_alpha(1.0);

		let label = match frame {
			Some(f) if f.show_translation => &word.translation,
			_ => &word.short_label,
		};
		ctx.set_line_width(1.0);
		ctx.set_stroke_style_str("black");
		ctx.set_fill_style_str("gray");
		let _ = ctx.fill_text(label, x, y);
		let _ = ctx.stroke_text(label, x, y);
	});
}
