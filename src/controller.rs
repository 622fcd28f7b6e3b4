use crate::events::{
    RowClick, LIST_BACKGROUND_CLICKED, PREVIEW_REQUEST, ROW_CLICKED, ROW_DRAGGED, TEXT_FOCUS_CHANGED,
};
use crate::state::{AppState, FileRow};
use batch_renamer::rename::RenameMode;
use batch_renamer::selection::RowDrag;
use batch_renamer::session::Notification;
use batch_renamer::Severity;
use druid::widget::Controller;
use druid::{Env, Event, EventCtx, LifeCycle, LifeCycleCtx, UpdateCtx, Widget};
use rfd::{MessageButtons, MessageDialog, MessageLevel};
use tracing::debug;

#[derive(Default)]
pub struct AppController {
    drag: RowDrag,
}

impl<W: Widget<AppState>> Controller<AppState, W> for AppController {
    fn event(
        &mut self,
        child: &mut W,
        ctx: &mut EventCtx,
        event: &Event,
        data: &mut AppState,
        env: &Env,
    ) {
        if let Event::MouseUp(_) = event {
            self.drag.release();
        }
        if let Event::Command(cmd) = event {
            if cmd.is(PREVIEW_REQUEST) {
                data.sync();
                ctx.set_handled();
                return;
            }
            if let Some(click) = cmd.get(ROW_CLICKED) {
                self.drag.press(&click.name);
                apply_click(data, click);
                data.sync();
                ctx.set_handled();
                return;
            }
            if let Some(name) = cmd.get(ROW_DRAGGED) {
                let changed = {
                    let mut session = data.session.borrow_mut();
                    self.drag.drag_over(session.files_mut(), name)
                };
                if changed {
                    data.sync();
                }
                ctx.set_handled();
                return;
            }
            if cmd.is(LIST_BACKGROUND_CLICKED) {
                data.session.borrow_mut().files_mut().clear_selection();
                data.sync();
                ctx.set_handled();
                return;
            }
            if let Some(&gained) = cmd.get(TEXT_FOCUS_CHANGED) {
                {
                    let mut session = data.session.borrow_mut();
                    if gained {
                        session.files_mut().snapshot_selection();
                    } else {
                        session.files_mut().restore_selection();
                    }
                }
                data.sync();
                ctx.set_handled();
                return;
            }
        }
        child.event(ctx, event, data, env);
    }

    fn update(
        &mut self,
        child: &mut W,
        ctx: &mut UpdateCtx,
        old_data: &AppState,
        data: &AppState,
        env: &Env,
    ) {
        let inputs_changed = old_data.replace_from != data.replace_from
            || old_data.replace_to != data.replace_to
            || old_data.case_mode != data.case_mode
            || old_data.prefix != data.prefix
            || old_data.suffix != data.suffix;
        if inputs_changed {
            ctx.submit_command(PREVIEW_REQUEST);
        }
        child.update(ctx, old_data, data, env);
    }
}

fn apply_click(data: &mut AppState, click: &RowClick) {
    debug!(name = %click.name, ctrl = click.ctrl, shift = click.shift, "row_click");
    let mut session = data.session.borrow_mut();
    let files = session.files_mut();
    if click.shift {
        files.shift_click(&click.name);
    } else if click.ctrl {
        files.ctrl_click(&click.name);
    } else {
        files.click(&click.name);
    }
}

/// リネームを実行して結果をダイアログで知らせる
pub fn run_rename(data: &mut AppState, mode: RenameMode) {
    let params = data.params();
    let note = {
        let mut session = data.session.borrow_mut();
        session.set_params(params);
        session.rename(mode)
    };
    data.status_message = note.message.clone();
    data.sync();
    show_notification(&note);
}

/// 通知をモーダルダイアログで表示する
pub fn show_notification(note: &Notification) {
    let level = match note.severity {
        Severity::Info => MessageLevel::Info,
        Severity::Warning => MessageLevel::Warning,
        Severity::Error => MessageLevel::Error,
    };
    MessageDialog::new()
        .set_title(&note.title)
        .set_description(&note.message)
        .set_buttons(MessageButtons::Ok)
        .set_level(level)
        .show();
}

/// 行クリックをルートへ送る
pub struct RowController;

impl<W: Widget<FileRow>> Controller<FileRow, W> for RowController {
    fn event(&mut self, child: &mut W, ctx: &mut EventCtx, event: &Event, data: &mut FileRow, env: &Env) {
        match event {
            Event::MouseDown(mouse) if mouse.button.is_left() => {
                ctx.submit_command(ROW_CLICKED.with(RowClick {
                    name: data.name.clone(),
                    ctrl: mouse.mods.ctrl() || mouse.mods.meta(),
                    shift: mouse.mods.shift(),
                }));
                ctx.set_handled();
                return;
            }
            Event::MouseMove(mouse) if mouse.buttons.has_left() => {
                ctx.submit_command(ROW_DRAGGED.with(data.name.clone()));
            }
            _ => {}
        }
        child.event(ctx, event, data, env);
    }
}

/// 行の無い場所のクリックで選択を解除する
pub struct ListBackgroundController;

impl<T, W: Widget<T>> Controller<T, W> for ListBackgroundController {
    fn event(&mut self, child: &mut W, ctx: &mut EventCtx, event: &Event, data: &mut T, env: &Env) {
        child.event(ctx, event, data, env);
        if let Event::MouseDown(mouse) = event {
            if mouse.button.is_left() && !ctx.is_handled() {
                ctx.submit_command(LIST_BACKGROUND_CLICKED);
            }
        }
    }
}

/// テキスト欄のフォーカス変化で選択の退避・復元を行う
pub struct FocusController;

impl<W: Widget<String>> Controller<String, W> for FocusController {
    fn lifecycle(
        &mut self,
        child: &mut W,
        ctx: &mut LifeCycleCtx,
        event: &LifeCycle,
        data: &String,
        env: &Env,
    ) {
        if let LifeCycle::FocusChanged(gained) = event {
            ctx.submit_command(TEXT_FOCUS_CHANGED.with(*gained));
        }
        child.lifecycle(ctx, event, data, env);
    }
}
