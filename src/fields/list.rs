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
use crate::draw::{BUTTON_V_PADDING, draw_value_mark};
use crate::*;
use log::debug;

fn list_inc(list: &ListData) {
    let count = list.source.count();
    if count == 0 {
        return;
    }
    let next = list.selection.get().wrapping_add(1);
    list.selection.set(if next >= count { 0 } else { next });
}

fn list_dec(list: &ListData) {
    let count = list.source.count();
    if count == 0 {
        return;
    }
    let v = list.selection.get();
    list.selection.set(if v > 0 { v - 1 } else { count - 1 });
}

/// Shared non-draw behaviour of U16 list child rows. Unlike the option
/// child, form start rewinds the scroll top to 0.
fn list_child_events(ctx: &mut FieldCtx<'_>, msg: Msg, list: &ListData) -> Response {
    let arg = ctx.ui.arg;
    match msg {
        Msg::FormStart => {
            ctx.ui.scroll.top = 0;
            if ctx.ui.scroll.visible <= arg {
                ctx.ui.scroll.visible = arg.saturating_add(1);
            }
            if ctx.ui.scroll.total == 0 {
                ctx.ui.scroll.total = list.source.count().min(255) as u8;
            }
            Response::Pass
        }
        Msg::CursorEnter | Msg::EventNext | Msg::EventPrev => handle_scroll_next_prev(ctx.ui, msg),
        Msg::CursorSelect | Msg::ValueIncrement | Msg::ValueDecrement => {
            let picked = ctx.ui.scroll.top as u16 + arg as u16;
            list.selection.set(picked);
            debug!("list child picked {picked}, returning to saved form");
            ctx.nav.restore_form();
            Response::Pass
        }
        _ => Response::Pass,
    }
}

/// One-line list picker over a [`ListData`] binding; the displayed entry is
/// the selected one.
pub struct ListLine {
    /// Single-press or up/down capture behaviour.
    pub model: EditModel,
}

impl Field for ListLine {
    fn handle(&self, ctx: &mut FieldCtx<'_>, msg: Msg) -> Response {
        let Some(list) = ctx.ui.uif.data.list() else {
            return Response::Pass;
        };
        match (self.model, msg) {
            (_, Msg::Draw) => {
                let label = list.source.element(list.selection.get());
                let width = ctx.ui.arg as i32;
                ctx.draw_styled_button(FocusStyle::PlainInvert, width, 1, &label);
            }
            (EditModel::Select, Msg::CursorSelect | Msg::ValueIncrement) => list_inc(&list),
            (EditModel::Select, Msg::ValueDecrement) => list_dec(&list),
            (EditModel::UpDown, Msg::CursorSelect | Msg::ValueIncrement | Msg::ValueDecrement) => ctx.ui.edit_mode.toggle(),
            (EditModel::UpDown, Msg::EventNext) if ctx.ui.edit_mode.is_active() => {
                list_inc(&list);
                return Response::Consumed;
            }
            (EditModel::UpDown, Msg::EventPrev) if ctx.ui.edit_mode.is_active() => {
                list_dec(&list);
                return Response::Consumed;
            }
            _ => {}
        }
        Response::Pass
    }
}

/// Parent side of a list pair: displays the selected entry and, on select,
/// saves the form and enters the child form (`arg`) with the cursor near the
/// current selection.
pub struct ListParent;

impl Field for ListParent {
    fn handle(&self, ctx: &mut FieldCtx<'_>, msg: Msg) -> Response {
        let Some(list) = ctx.ui.uif.data.list() else {
            return Response::Pass;
        };
        match msg {
            Msg::Draw => {
                let label = list.source.element(list.selection.get());
                ctx.draw_styled_button(FocusStyle::PlainInvert, 0, 1, &label);
            }
            Msg::CursorSelect | Msg::ValueIncrement | Msg::ValueDecrement => {
                debug!("entering list child form {}", ctx.ui.arg);
                ctx.nav.save_form();
                let cursor = list.selection.get().min(255) as u8;
                ctx.nav.goto_form(ctx.ui.arg, cursor);
            }
            _ => {}
        }
        Response::Pass
    }
}

/// Full-width child row of a list pair: a value mark flags the selected
/// entry, the focused row is framed across the display.
pub struct ListChild;

impl Field for ListChild {
    fn handle(&self, ctx: &mut FieldCtx<'_>, msg: Msg) -> Response {
        let Some(list) = ctx.ui.uif.data.list() else {
            return Response::Pass;
        };
        match msg {
            Msg::Draw => {
                let pos = ctx.ui.scroll.top as u16 + ctx.ui.arg as u16;
                let x = ctx.scaled_x();
                let y = ctx.y();
                let is_focus = ctx.ui.is_cursor_focus();
                let mut a = ctx.gfx.ascent() - 2;
                if list.selection.get() == pos {
                    draw_value_mark(ctx.gfx, x, y, a);
                }
                a += 2;
                if pos < list.source.count() {
                    let label = list.source.element(pos);
                    ctx.gfx.draw_utf8(x + a, y, &label);
                }
                if is_focus {
                    let dw = ctx.gfx.display_width();
                    ctx.gfx.draw_button_frame(0, y, DrawFlags::INVERT, dw, 0, BUTTON_V_PADDING);
                }
                Response::Pass
            }
            _ => list_child_events(ctx, msg, &list),
        }
    }
}

/// Full-width jump row over a list: the first byte of the entry text is the
/// target form id, the rest is the label. Select records the selection and
/// the cursor position, then jumps; returning re-focuses the same row.
pub struct ListJumpChild;

impl Field for ListJumpChild {
    fn handle(&self, ctx: &mut FieldCtx<'_>, msg: Msg) -> Response {
        let Some(list) = ctx.ui.uif.data.list() else {
            return Response::Pass;
        };
        let pos = ctx.ui.scroll.top as u16 + ctx.ui.arg as u16;
        match msg {
            Msg::Draw => {
                let entry = list.source.element(pos);
                let label = entry.get(1..).unwrap_or("").to_string();
                let x = ctx.scaled_x();
                let width = ctx.gfx.display_width() - 2 * x;
                ctx.draw_styled_button(FocusStyle::PlainInvert, width, x, &label);
            }
            Msg::CursorSelect | Msg::ValueIncrement | Msg::ValueDecrement => {
                list.selection.set(pos);
                ctx.nav.save_cursor_position(if pos >= 255 { 0 } else { pos as u8 });
                if let Some(&id) = list.source.element(pos).as_bytes().first() {
                    debug!("list jump row {pos} entering form {id}");
                    ctx.nav.goto_form_auto_cursor(id);
                }
            }
            _ => return list_child_events(ctx, msg, &list),
        }
        Response::Pass
    }
}
