use crate::state::FileRow;
use batch_renamer::transform::split_name;
use druid::kurbo::{Point, Rect, Size};
use druid::piet::{Color, FontFamily, PietText, PietTextLayout, Text, TextLayout, TextLayoutBuilder};
use druid::{
    BoxConstraints, Data, Env, Event, EventCtx, LayoutCtx, LifeCycle, LifeCycleCtx, PaintCtx,
    RenderContext, UpdateCtx, Widget,
};
use regex::Regex;

/// ファイル名を表示し、選択行では stem 内の置換対象をハイライトするラベル
#[derive(Default)]
pub struct HighlightedLabel;

fn build_layout(text: &mut PietText, s: &str, color: Color, env: &Env) -> Option<PietTextLayout> {
    text.new_text_layout(s.to_string())
        .font(FontFamily::SYSTEM_UI, env.get(druid::theme::TEXT_SIZE_NORMAL))
        .text_color(color)
        .build()
        .ok()
}

/// ハイライトする範囲（バイト位置）。拡張子部分は対象外
fn highlight_ranges(row: &FileRow) -> Vec<(usize, usize)> {
    if !row.selected || row.replace_from.is_empty() {
        return Vec::new();
    }
    let Ok(re) = Regex::new(&regex::escape(&row.replace_from)) else {
        return Vec::new();
    };
    let (stem, _) = split_name(&row.name);
    re.find_iter(stem).map(|m| (m.start(), m.end())).collect()
}

impl Widget<FileRow> for HighlightedLabel {
    fn event(&mut self, _ctx: &mut EventCtx, _event: &Event, _data: &mut FileRow, _env: &Env) {}

    fn lifecycle(&mut self, _ctx: &mut LifeCycleCtx, _event: &LifeCycle, _data: &FileRow, _env: &Env) {}

    fn update(&mut self, ctx: &mut UpdateCtx, old_data: &FileRow, data: &FileRow, _env: &Env) {
        if !old_data.same(data) {
            ctx.request_layout();
        }
    }

    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints, data: &FileRow, env: &Env) -> Size {
        let color = env.get(druid::theme::TEXT_COLOR);
        match build_layout(ctx.text(), &data.name, color, env) {
            Some(layout) => bc.constrain(layout.size()),
            None => bc.min(),
        }
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &FileRow, env: &Env) {
        let text_color = env.get(druid::theme::TEXT_COLOR);
        let ranges = highlight_ranges(data);
        if ranges.is_empty() {
            if let Some(layout) = build_layout(ctx.text(), &data.name, text_color, env) {
                ctx.draw_text(&layout, Point::ORIGIN);
            }
            return;
        }

        let mut current_x = 0.0;
        let mut last = 0usize;
        for (start, end) in ranges {
            if start > last {
                if let Some(normal) = build_layout(ctx.text(), &data.name[last..start], text_color.clone(), env) {
                    ctx.draw_text(&normal, Point::new(current_x, 0.0));
                    current_x += normal.size().width;
                }
            }
            if let Some(hl) = build_layout(ctx.text(), &data.name[start..end], Color::rgb8(0, 0, 0), env) {
                let hl_size = hl.size();
                let rect = Rect::new(current_x, 0.0, current_x + hl_size.width, hl_size.height);
                ctx.fill(rect, &Color::rgb8(255, 255, 0));
                ctx.draw_text(&hl, Point::new(current_x, 0.0));
                current_x += hl_size.width;
            }
            last = end;
        }
        if last < data.name.len() {
            if let Some(tail) = build_layout(ctx.text(), &data.name[last..], text_color, env) {
                ctx.draw_text(&tail, Point::new(current_x, 0.0));
            }
        }
    }
}
