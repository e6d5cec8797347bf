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
use crate::*;

/// Returns the decimal width (1, 2 or 3 digits) a picker needs for `max`.
pub(crate) fn decimal_digits(max: u8) -> usize {
    if max < 10 {
        1
    } else if max < 100 {
        2
    } else {
        3
    }
}

/// Fixed-width digit template used for measuring numeric buttons.
pub(crate) fn digit_template(digits: usize) -> &'static str { &"999"[..digits] }

fn inc_wrap(mm: &U8MinMax) {
    let next = mm.value.get() as u16 + 1;
    if next > mm.max as u16 {
        mm.value.set(mm.min);
    } else {
        mm.value.set(next as u8);
    }
}

fn dec_wrap(mm: &U8MinMax) {
    let v = mm.value.get();
    if v > mm.min {
        mm.value.set(v - 1);
    } else {
        mm.value.set(mm.max);
    }
}

fn draw_number(ctx: &mut FieldCtx<'_>, mm: &U8MinMax, style: FocusStyle) {
    let mut v = mm.value.get();
    if v > mm.max {
        v = mm.max;
    }
    if v <= mm.min {
        v = mm.min;
    }
    mm.value.set(v);
    let digits = decimal_digits(mm.max);
    let width = ctx.gfx.utf8_width(digit_template(digits)) + 1;
    let label = format!("{:0width$}", v, width = digits);
    ctx.draw_styled_button(style, width, 1, &label);
}

/// Integer picker over a [`U8MinMax`] binding, rendered as a fixed-width
/// zero-padded numeric button.
///
/// With [`EditModel::Select`], select/increment advance the value (wrapping
/// to `min` past `max`) and decrement walks back (wrapping to `max` under
/// `min`). With [`EditModel::UpDown`], select toggles capture and next/prev
/// apply the same wrap rules while captured.
pub struct U8Number {
    /// Single-press or up/down capture behaviour.
    pub model: EditModel,
    /// Visual style (plain/invert or plain/frame).
    pub style: FocusStyle,
}

impl U8Number {
    /// Creates a picker handler.
    pub fn new(model: EditModel, style: FocusStyle) -> Self { Self { model, style } }
}

impl Field for U8Number {
    fn handle(&self, ctx: &mut FieldCtx<'_>, msg: Msg) -> Response {
        let Some(mm) = ctx.ui.uif.data.u8_min_max() else {
            return Response::Pass;
        };
        match (self.model, msg) {
            (_, Msg::Draw) => draw_number(ctx, &mm, self.style),
            (EditModel::Select, Msg::CursorSelect | Msg::ValueIncrement) => inc_wrap(&mm),
            (EditModel::Select, Msg::ValueDecrement) => dec_wrap(&mm),
            (EditModel::UpDown, Msg::CursorSelect | Msg::ValueIncrement | Msg::ValueDecrement) => ctx.ui.edit_mode.toggle(),
            (EditModel::UpDown, Msg::EventNext) if ctx.ui.edit_mode.is_active() => {
                inc_wrap(&mm);
                return Response::Consumed;
            }
            (EditModel::UpDown, Msg::EventPrev) if ctx.ui.edit_mode.is_active() => {
                dec_wrap(&mm);
                return Response::Consumed;
            }
            _ => {}
        }
        Response::Pass
    }
}

/// Single-character editor over a plain byte binding; the value cycles
/// through space, `A`-`Z`, `a`-`z` and `0`-`9`.
///
/// Up/down capture only: select toggles capture, next/prev step to the
/// neighbouring valid character while captured. Draw normalizes the byte
/// upward to the next valid character before rendering.
pub struct CharInput;

impl Field for CharInput {
    fn handle(&self, ctx: &mut FieldCtx<'_>, msg: Msg) -> Response {
        let Some(value) = ctx.ui.uif.data.u8_value() else {
            return Response::Pass;
        };
        match msg {
            Msg::Draw => {
                let mut c = value.get();
                while !is_plain_char(c) {
                    c = c.wrapping_add(1);
                }
                value.set(c);
                let width = ctx.gfx.max_char_width();
                let label = char::from(c).to_string();
                ctx.draw_styled_button(FocusStyle::PlainInvert, width, 1, &label);
            }
            Msg::CursorSelect | Msg::ValueIncrement | Msg::ValueDecrement => ctx.ui.edit_mode.toggle(),
            Msg::EventNext if ctx.ui.edit_mode.is_active() => {
                let mut c = value.get();
                loop {
                    c = c.wrapping_add(1);
                    if is_plain_char(c) {
                        break;
                    }
                }
                value.set(c);
                return Response::Consumed;
            }
            Msg::EventPrev if ctx.ui.edit_mode.is_active() => {
                let mut c = value.get();
                loop {
                    c = c.wrapping_sub(1);
                    if is_plain_char(c) {
                        break;
                    }
                }
                value.set(c);
                return Response::Consumed;
            }
            _ => {}
        }
        Response::Pass
    }
}
