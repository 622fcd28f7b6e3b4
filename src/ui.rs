use crate::controller::{
    run_rename, show_notification, FocusController, ListBackgroundController, RowController,
};
use crate::state::{AppState, CaseChoice, FileRow};
use crate::widgets::HighlightedLabel;
use batch_renamer::rename::RenameMode;
use batch_renamer::selection::SortColumn;
use batch_renamer::session::Notification;
use batch_renamer::CaseMode;
use druid::piet::Color;
use druid::widget::{
    Button, CrossAxisAlignment, Flex, Label, List, Painter, RadioGroup, Scroll, TextBox,
};
use druid::{Env, RenderContext, Widget, WidgetExt};
use tracing::warn;

const LABEL_WIDTH: f64 = 80.0;
const MODIFIED_WIDTH: f64 = 160.0;

fn selected_background() -> Color {
    Color::rgb8(0x2b, 0x5b, 0x8c)
}

fn file_row() -> impl Widget<FileRow> {
    Flex::row()
        .with_flex_child(HighlightedLabel, 1.0)
        .with_spacer(8.0)
        .with_flex_child(Label::new(|row: &FileRow, _env: &Env| row.preview.clone()), 1.0)
        .with_spacer(8.0)
        .with_child(Label::new(|row: &FileRow, _env: &Env| row.modified.clone()).fix_width(MODIFIED_WIDTH))
        .padding((6.0, 3.0))
        .background(Painter::new(|ctx, row: &FileRow, _env| {
            if row.selected {
                let rect = ctx.size().to_rect();
                ctx.fill(rect, &selected_background());
            }
        }))
        .controller(RowController)
}

fn text_row(label: &'static str, field: impl Widget<AppState> + 'static) -> impl Widget<AppState> {
    Flex::row()
        .with_child(Label::new(label).fix_width(LABEL_WIDTH))
        .with_spacer(5.0)
        .with_flex_child(field, 1.0)
}

fn text_box() -> impl Widget<String> {
    TextBox::new().controller(FocusController).fix_height(30.0)
}

fn open_folder(data: &mut AppState) {
    let Some(path) = rfd::FileDialog::new().pick_folder() else {
        return;
    };
    let result = data.session.borrow_mut().open_folder(path);
    match result {
        Ok(count) => data.status_message = format!("Loaded {} files", count),
        Err(err) => {
            warn!(error = %err, "open_folder_failed");
            let note = Notification::from(&err);
            data.status_message = note.message.clone();
            show_notification(&note);
        }
    }
    data.sync();
}

fn sort_by(data: &mut AppState, column: SortColumn) {
    data.session.borrow_mut().files_mut().sort_by(column);
    data.sync();
}

fn select_all(data: &mut AppState, select: bool) {
    {
        let mut session = data.session.borrow_mut();
        if select {
            session.files_mut().select_all();
        } else {
            session.files_mut().deselect_all();
        }
    }
    data.sync();
}

pub fn build_ui() -> impl Widget<AppState> {
    let folder_row = Flex::column()
        .with_child(
            Button::new("Open Folder")
                .on_click(|_ctx, data: &mut AppState, _env| open_folder(data))
                .fix_size(160.0, 36.0),
        )
        .with_spacer(8.0)
        .with_child(Label::new(|data: &AppState, _env: &Env| data.folder_label.clone()))
        .cross_axis_alignment(CrossAxisAlignment::Start);

    let header = Flex::row()
        .with_flex_child(
            Button::dynamic(|data: &AppState, _env| data.name_header.clone())
                .on_click(|_ctx, data: &mut AppState, _env| sort_by(data, SortColumn::Name))
                .expand_width(),
            1.0,
        )
        .with_spacer(8.0)
        .with_flex_child(Label::new("Preview").expand_width(), 1.0)
        .with_spacer(8.0)
        .with_child(
            Button::dynamic(|data: &AppState, _env| data.modified_header.clone())
                .on_click(|_ctx, data: &mut AppState, _env| sort_by(data, SortColumn::Modified))
                .fix_width(MODIFIED_WIDTH),
        );

    let file_list = Scroll::new(List::new(file_row))
        .vertical()
        .expand()
        .controller(ListBackgroundController)
        .lens(AppState::rows);

    let selection_row = Flex::row()
        .with_flex_child(
            Button::new("Select All")
                .on_click(|_ctx, data: &mut AppState, _env| select_all(data, true))
                .expand_width(),
            1.0,
        )
        .with_spacer(10.0)
        .with_flex_child(
            Button::new("Deselect All")
                .on_click(|_ctx, data: &mut AppState, _env| select_all(data, false))
                .expand_width(),
            1.0,
        );

    let replace_section = Flex::row()
        .with_flex_child(
            Flex::column()
                .with_child(Label::new("Replace character(s)"))
                .with_spacer(5.0)
                .with_child(text_row("Replace:", text_box().lens(AppState::replace_from)))
                .with_spacer(5.0)
                .with_child(text_row("With:", text_box().lens(AppState::replace_to)))
                .cross_axis_alignment(CrossAxisAlignment::Start),
            1.0,
        )
        .with_spacer(10.0)
        .with_child(
            Button::new("Replace character(s)")
                .on_click(|_ctx, data: &mut AppState, _env| run_rename(data, RenameMode::Replace)),
        );

    let case_options: Vec<(&'static str, CaseChoice)> = CaseMode::ALL
        .iter()
        .map(|mode| (mode.label(), CaseChoice(*mode)))
        .collect();
    let case_section = Flex::row()
        .with_child(Label::new("Case Conversion:").fix_width(LABEL_WIDTH * 1.6))
        .with_flex_child(RadioGroup::row(case_options).lens(AppState::case_mode), 1.0)
        .with_spacer(10.0)
        .with_child(
            Button::new("Change Case")
                .on_click(|_ctx, data: &mut AppState, _env| run_rename(data, RenameMode::Case)),
        );

    let affix_section = Flex::row()
        .with_flex_child(
            Flex::column()
                .with_child(Label::new("Add Prefix/Suffix:"))
                .with_spacer(5.0)
                .with_child(text_row("Prefix:", text_box().lens(AppState::prefix)))
                .with_spacer(5.0)
                .with_child(text_row("Suffix:", text_box().lens(AppState::suffix)))
                .cross_axis_alignment(CrossAxisAlignment::Start),
            1.0,
        )
        .with_spacer(10.0)
        .with_child(
            Button::new("Rename Prefix/Suffix").on_click(|_ctx, data: &mut AppState, _env| {
                run_rename(data, RenameMode::PrefixSuffix)
            }),
        );

    Flex::column()
        .with_child(folder_row)
        .with_spacer(10.0)
        .with_child(header)
        .with_flex_child(file_list, 1.0)
        .with_spacer(8.0)
        .with_child(selection_row)
        .with_spacer(12.0)
        .with_child(replace_section)
        .with_spacer(12.0)
        .with_child(case_section)
        .with_spacer(12.0)
        .with_child(affix_section)
        .with_spacer(10.0)
        .with_child(Label::new(|data: &AppState, _env: &Env| data.status_message.clone()))
        .cross_axis_alignment(CrossAxisAlignment::Fill)
        .padding(10.0)
        .controller(crate::controller::AppController::default())
}
