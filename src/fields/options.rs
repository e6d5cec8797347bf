//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
use crate::draw::{BUTTON_V_PADDING, draw_checkbox, draw_value_mark};
use crate::*;
use log::debug;
use std::cell::Cell;

/// Shared non-draw behaviour of option child rows.
///
/// `FORM_START` grows the visible window to cover this row and seeds the
/// total from the parent's selectable option count (only while still 0; the
/// scroll top survives re-entry on purpose). Cursor/next/prev defer to the
/// scroll controller; select stores `top + arg` through the binding and
/// returns to the saved form.
pub(crate) fn option_child_events(ctx: &mut FieldCtx<'_>, msg: Msg, value: Option<&Cell<u8>>) -> Response {
    let arg = ctx.ui.arg;
    match msg {
        Msg::FormStart => {
            if ctx.ui.scroll.visible <= arg {
                ctx.ui.scroll.visible = arg.saturating_add(1);
            }
            if ctx.ui.scroll.total == 0 {
                let fds = ctx.ui.last_form_fds;
                ctx.ui.scroll.total = ctx.nav.selectable_option_count(fds);
            }
            Response::Pass
        }
        Msg::CursorEnter | Msg::EventNext | Msg::EventPrev => handle_scroll_next_prev(ctx.ui, msg),
        Msg::CursorSelect | Msg::ValueIncrement | Msg::ValueDecrement => {
            let picked = ctx.ui.scroll.top.saturating_add(arg);
            if let Some(value) = value {
                value.set(picked);
            }
            debug!("option child picked {picked}, returning to saved form");
            ctx.nav.restore_form();
            Response::Pass
        }
        _ => Response::Pass,
    }
}

/// One-line option picker: `text` holds `|`-separated options and the bound
/// byte indexes the displayed one. An out-of-range index wraps to 0 before
/// drawing.
pub struct OptionLine {
    /// Single-press or up/down capture behaviour.
    pub model: EditModel,
    /// Visual style (plain/invert or plain/frame).
    pub style: FocusStyle,
}

impl OptionLine {
    /// Creates an option-line handler.
    pub fn new(model: EditModel, style: FocusStyle) -> Self { Self { model, style } }
}

impl Field for OptionLine {
    fn handle(&self, ctx: &mut FieldCtx<'_>, msg: Msg) -> Response {
        let Some(value) = ctx.ui.uif.data.u8_value() else {
            return Response::Pass;
        };
        match (self.model, msg) {
            (_, Msg::Draw) => {
                if !ctx.fetch_nth_token(value.get()) {
                    value.set(0);
                    ctx.fetch_nth_token(0);
                }
                let label = ctx.ui.text.clone();
                let width = ctx.ui.arg as i32;
                ctx.draw_styled_button(self.style, width, 1, &label);
            }
            (EditModel::Select, Msg::CursorSelect | Msg::ValueIncrement) => {
                value.set(value.get().wrapping_add(1));
                if !ctx.fetch_nth_token(value.get()) {
                    value.set(0);
                }
            }
            (EditModel::Select, Msg::ValueDecrement) => {
                let v = value.get();
                if v > 0 {
                    value.set(v - 1);
                } else {
                    value.set(ctx.nav.fds_get_token_count().saturating_sub(1));
                }
            }
            (EditModel::UpDown, Msg::CursorSelect | Msg::ValueIncrement | Msg::ValueDecrement) => ctx.ui.edit_mode.toggle(),
            (EditModel::UpDown, Msg::EventNext) if ctx.ui.edit_mode.is_active() => {
                value.set(value.get().wrapping_add(1));
                if !ctx.fetch_nth_token(value.get()) {
                    value.set(0);
                }
                return Response::Consumed;
            }
            (EditModel::UpDown, Msg::EventPrev) if ctx.ui.edit_mode.is_active() => {
                let mut v = value.get();
                if v == 0 {
                    v = ctx.nav.fds_get_token_count();
                }
                value.set(v.saturating_sub(1));
                return Response::Consumed;
            }
            _ => {}
        }
        Response::Pass
    }
}

/// Checkbox over a plain byte binding holding 0 or 1; select toggles.
/// The square's side equals the font ascent, the optional label follows two
/// pixels after, and the whole row inverts while focused.
pub struct Checkbox;

impl Field for Checkbox {
    fn handle(&self, ctx: &mut FieldCtx<'_>, msg: Msg) -> Response {
        let Some(value) = ctx.ui.uif.data.u8_value() else {
            return Response::Pass;
        };
        match msg {
            Msg::Draw => {
                if value.get() > 1 {
                    value.set(1);
                }
                let flags = if ctx.ui.is_cursor_focus() { DrawFlags::INVERT } else { DrawFlags::NONE };
                let x = ctx.scaled_x();
                let y = ctx.y();
                let mut a = ctx.gfx.ascent();
                let mut w = 0;
                draw_checkbox(ctx.gfx, x, y, a, value.get() != 0);
                if !ctx.ui.text.is_empty() {
                    let label = ctx.ui.text.clone();
                    w = ctx.gfx.utf8_width(&label);
                    a += 2;
                    ctx.gfx.draw_utf8(x + a, y, &label);
                }
                ctx.gfx.draw_button_frame(x, y, flags, w + a, 1, BUTTON_V_PADDING);
            }
            Msg::CursorSelect | Msg::ValueIncrement | Msg::ValueDecrement => {
                value.set(if value.get() == 0 { 1 } else { 0 });
            }
            _ => {}
        }
        Response::Pass
    }
}

/// Radio button over a plain byte binding; filled while the bound value
/// equals this field's `arg`, and select writes `arg` into the binding.
pub struct Radio;

impl Field for Radio {
    fn handle(&self, ctx: &mut FieldCtx<'_>, msg: Msg) -> Response {
        let Some(value) = ctx.ui.uif.data.u8_value() else {
            return Response::Pass;
        };
        match msg {
            Msg::Draw => {
                let flags = if ctx.ui.is_cursor_focus() { DrawFlags::INVERT } else { DrawFlags::NONE };
                let x = ctx.scaled_x();
                let y = ctx.y();
                let mut a = ctx.gfx.ascent();
                let mut w = 0;
                draw_checkbox(ctx.gfx, x, y, a, value.get() == ctx.ui.arg);
                if !ctx.ui.text.is_empty() {
                    let label = ctx.ui.text.clone();
                    w = ctx.gfx.utf8_width(&label);
                    a += 2;
                    ctx.gfx.draw_utf8(x + a, y, &label);
                }
                ctx.gfx.draw_button_frame(x, y, flags, w + a, 1, BUTTON_V_PADDING);
            }
            Msg::CursorSelect | Msg::ValueIncrement | Msg::ValueDecrement => value.set(ctx.ui.arg),
            _ => {}
        }
        Response::Pass
    }
}

/// Parent side of an option pair, shown on the outer form: displays the
/// selected option and, on select, saves the form and enters the child form
/// (`arg`) with the cursor on the current value.
pub struct OptionParent;

impl Field for OptionParent {
    fn handle(&self, ctx: &mut FieldCtx<'_>, msg: Msg) -> Response {
        let Some(value) = ctx.ui.uif.data.u8_value() else {
            return Response::Pass;
        };
        match msg {
            Msg::Draw => {
                if !ctx.fetch_nth_token(value.get()) {
                    value.set(0);
                    ctx.fetch_nth_token(0);
                }
                let label = ctx.ui.text.clone();
                ctx.draw_styled_button(FocusStyle::PlainInvert, 0, 1, &label);
            }
            Msg::CursorSelect | Msg::ValueIncrement | Msg::ValueDecrement => {
                debug!("entering option child form {}", ctx.ui.arg);
                ctx.nav.save_form();
                // The selectable rows sit at the head of the child form, so
                // the stored value doubles as the initial cursor position.
                ctx.nav.goto_form(ctx.ui.arg, value.get());
            }
            _ => {}
        }
        Response::Pass
    }
}

/// Child row of an option pair, rendered as a plain text button. Missing
/// text is recovered from the parent's option list through `last_form_fds`;
/// if still empty, the slot draws nothing.
pub struct OptionChild;

impl Field for OptionChild {
    fn handle(&self, ctx: &mut FieldCtx<'_>, msg: Msg) -> Response {
        match msg {
            Msg::Draw => {
                let arg = ctx.ui.arg;
                let flags = ctx.style_flags(FocusStyle::PlainInvert);
                let x = ctx.scaled_x();
                let y = ctx.y();
                if ctx.ui.text.is_empty() {
                    let index = ctx.ui.scroll.top.saturating_add(arg);
                    ctx.fetch_option_text(index);
                }
                if !ctx.ui.text.is_empty() {
                    let label = ctx.ui.text.clone();
                    ctx.gfx.draw_button_utf8(x, y, flags, 0, 1, BUTTON_V_PADDING, &label);
                }
                Response::Pass
            }
            _ => {
                let value = ctx.ui.uif.data.u8_value();
                option_child_events(ctx, msg, value.as_deref())
            }
        }
    }
}

/// Radio-style child row of an option pair: a value mark flags the row the
/// bound byte currently selects, and the focused row carries a button frame
/// around the text (`full_width` false) or across the display.
pub struct RadioChild {
    /// Frame the whole display row instead of the text extent.
    pub full_width: bool,
}

impl Field for RadioChild {
    fn handle(&self, ctx: &mut FieldCtx<'_>, msg: Msg) -> Response {
        let Some(value) = ctx.ui.uif.data.u8_value() else {
            return Response::Pass;
        };
        match msg {
            Msg::Draw => {
                let arg = ctx.ui.arg;
                let x = ctx.scaled_x();
                let y = ctx.y();
                let is_focus = ctx.ui.is_cursor_focus();
                let mut a = ctx.gfx.ascent() - 2;
                let mut w = 0;
                if value.get() == ctx.ui.scroll.top.saturating_add(arg) {
                    draw_value_mark(ctx.gfx, x, y, a);
                }
                if ctx.ui.text.is_empty() {
                    let index = ctx.ui.scroll.top.saturating_add(arg);
                    ctx.fetch_option_text(index);
                }
                if !ctx.ui.text.is_empty() {
                    let label = ctx.ui.text.clone();
                    w = ctx.gfx.utf8_width(&label);
                    a += 2;
                    ctx.gfx.draw_utf8(x + a, y, &label);
                }
                if is_focus {
                    if self.full_width {
                        let dw = ctx.gfx.display_width();
                        ctx.gfx.draw_button_frame(0, y, DrawFlags::INVERT, dw, 0, BUTTON_V_PADDING);
                    } else {
                        ctx.gfx.draw_button_frame(x, y, DrawFlags::INVERT, w + a, 1, BUTTON_V_PADDING);
                    }
                }
                Response::Pass
            }
            _ => option_child_events(ctx, msg, Some(&value)),
        }
    }
}

/// Invisible field carrying a form's option list: not drawn, not selectable.
/// On form start it records its definition position into `last_form_fds` so
/// the child rows can read the options from it.
pub struct OptionListAnchor;

impl Field for OptionListAnchor {
    fn handle(&self, ctx: &mut FieldCtx<'_>, msg: Msg) -> Response {
        if msg == Msg::FormStart {
            ctx.ui.last_form_fds = ctx.ui.fds;
        }
        Response::Pass
    }
}

/// Full-width jump row of a goto menu: the first byte of the option text is
/// the target form id, the rest is the label. Select saves the cursor
/// position so returning re-focuses the same row. All other behaviour is the
/// common option-child handling.
pub struct JumpChild {
    /// Visual style (plain/invert or plain/frame).
    pub style: FocusStyle,
}

impl Field for JumpChild {
    fn handle(&self, ctx: &mut FieldCtx<'_>, msg: Msg) -> Response {
        let arg = ctx.ui.arg;
        match msg {
            Msg::Draw => {
                let index = ctx.ui.scroll.top.saturating_add(arg);
                if ctx.fetch_option_text(index) {
                    let label = ctx.ui.text.get(1..).unwrap_or("").to_string();
                    let x = ctx.scaled_x();
                    let width = ctx.gfx.display_width() - 2 * x;
                    let pad_h = match self.style {
                        FocusStyle::PlainInvert => x,
                        _ => x - 1,
                    };
                    ctx.draw_styled_button(self.style, width, pad_h, &label);
                }
                Response::Pass
            }
            Msg::CursorSelect => {
                let index = ctx.ui.scroll.top.saturating_add(arg);
                if ctx.fetch_option_text(index) {
                    if let Some(&id) = ctx.ui.text.as_bytes().first() {
                        ctx.nav.save_cursor_position(index);
                        debug!("jump row {index} entering form {id}");
                        return Response::consumed_if(ctx.nav.goto_form_auto_cursor(id));
                    }
                }
                Response::Pass
            }
            _ => option_child_events(ctx, msg, None),
        }
    }
}
