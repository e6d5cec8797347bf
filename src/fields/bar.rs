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
use super::value::{decimal_digits, digit_template};
use crate::*;

fn step_up(mms: &U8MinMaxStep) {
    let next = mms.value.get() as i32 + mms.step as i32;
    if next > mms.max as i32 {
        mms.value.set(if mms.flags.is_no_wrap() { mms.max } else { mms.min });
    } else {
        mms.value.set(next as u8);
    }
}

fn step_down(mms: &U8MinMaxStep) {
    let v = mms.value.get() as i32;
    let next = v - mms.step as i32;
    if next >= mms.min as i32 && v <= mms.max as i32 {
        mms.value.set(next as u8);
    } else {
        mms.value.set(if mms.flags.is_no_wrap() { mms.min } else { mms.max });
    }
}

fn draw_bar(ctx: &mut FieldCtx<'_>, mms: &U8MinMaxStep, style: FocusStyle, fixed_width: bool) {
    let scale = mms.flags.scale();
    let mut v = mms.value.get();
    if v > mms.max {
        v = mms.max;
    }
    if v <= mms.min {
        v = mms.min;
    }
    mms.value.set(v);

    let (mut w, fill) = if fixed_width {
        let total = (mms.width as i32) << scale;
        let fill = if mms.max > 0 {
            // Wider intermediate type: value * total would overflow a u16
            // on 4x scaled bars.
            ((v as i64 * total as i64) / mms.max as i64) as i32
        } else {
            0
        };
        (total, fill)
    } else {
        ((mms.max as i32) << scale, (v as i32) << scale)
    };
    w += 2;

    let x = ctx.scaled_x();
    let y = ctx.y();
    let height = ctx.gfx.ascent();
    ctx.gfx.draw_frame(rect(x, y - height, w, height));
    ctx.gfx.draw_box(rect(x + 1, y - height + 1, fill, height - 2));
    if mms.flags.shows_value() {
        let digits = decimal_digits(mms.max);
        w += 2;
        let label = format!("{:0width$}", v, width = digits);
        ctx.gfx.draw_utf8(x + w, y, &label);
        w += ctx.gfx.utf8_width(digit_template(digits));
        w += 1;
    }

    let flags = ctx.style_flags(style);
    // The enclosing frame is measured around the composite; the font descent
    // must not leak into that measurement.
    let backup = ctx.gfx.replace_descent(0);
    ctx.gfx.draw_button_frame(x, y, flags, w, 1, 1);
    ctx.gfx.replace_descent(backup);
}

/// Bar/slider control over a [`U8MinMaxStep`] binding.
///
/// The filled region grows one pixel per value unit (scaled ×2/×4 through
/// [`BarFlags`]), or maps the value onto a fixed total length when
/// `fixed_width` is set. [`BarFlags::NO_WRAP`] clamps at the range ends,
/// [`BarFlags::SHOW_VALUE`] appends the numeric readout after the bar.
pub struct Bar {
    /// Single-press or up/down capture behaviour.
    pub model: EditModel,
    /// Visual style (plain/invert or plain/frame).
    pub style: FocusStyle,
    /// Map the value onto the binding's `width` instead of growing with it.
    pub fixed_width: bool,
}

impl Bar {
    /// Creates a bar whose length is derived from `max`.
    pub fn new(model: EditModel, style: FocusStyle) -> Self {
        Self {
            model,
            style,
            fixed_width: false,
        }
    }

    /// Creates a bar with a fixed total length taken from the binding.
    pub fn fixed_width(model: EditModel, style: FocusStyle) -> Self {
        Self {
            model,
            style,
            fixed_width: true,
        }
    }
}

impl Field for Bar {
    fn handle(&self, ctx: &mut FieldCtx<'_>, msg: Msg) -> Response {
        let Some(mms) = ctx.ui.uif.data.u8_min_max_step() else {
            return Response::Pass;
        };
        match (self.model, msg) {
            (_, Msg::Draw) => draw_bar(ctx, &mms, self.style, self.fixed_width),
            (EditModel::Select, Msg::CursorSelect | Msg::ValueIncrement) => step_up(&mms),
            (EditModel::Select, Msg::ValueDecrement) => step_down(&mms),
            (EditModel::UpDown, Msg::CursorSelect | Msg::ValueIncrement | Msg::ValueDecrement) => ctx.ui.edit_mode.toggle(),
            (EditModel::UpDown, Msg::EventNext) if ctx.ui.edit_mode.is_active() => {
                step_up(&mms);
                return Response::Consumed;
            }
            (EditModel::UpDown, Msg::EventPrev) if ctx.ui.edit_mode.is_active() => {
                step_down(&mms);
                return Response::Consumed;
            }
            _ => {}
        }
        Response::Pass
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{DrawOp, Fixture};
    use std::rc::Rc;

    fn bar_data(value: u8, min: u8, max: u8, step: u8, width: u8, flags: BarFlags) -> (Fixture, Rc<U8MinMaxStep>) {
        let mms = Rc::new(U8MinMaxStep {
            value: std::cell::Cell::new(value),
            min,
            max,
            step,
            width,
            flags,
        });
        let fixture = Fixture::with_data(FieldData::U8MinMaxStep(mms.clone()));
        (fixture, mms)
    }

    #[test]
    fn no_wrap_clamps_at_both_ends() {
        let (mut fixture, mms) = bar_data(100, 0, 100, 10, 0, BarFlags::NO_WRAP);
        let field = Bar::new(EditModel::Select, FocusStyle::PlainInvert);
        fixture.send(&field, Msg::ValueIncrement);
        assert_eq!(mms.value.get(), 100);
        fixture.send(&field, Msg::ValueDecrement);
        assert_eq!(mms.value.get(), 90);

        mms.value.set(0);
        fixture.send(&field, Msg::ValueDecrement);
        assert_eq!(mms.value.get(), 0);
    }

    #[test]
    fn wrapping_steps_cross_the_range_ends() {
        let (mut fixture, mms) = bar_data(95, 0, 100, 10, 0, BarFlags::NONE);
        let field = Bar::new(EditModel::Select, FocusStyle::PlainInvert);
        fixture.send(&field, Msg::ValueIncrement);
        assert_eq!(mms.value.get(), 0);
        fixture.send(&field, Msg::ValueDecrement);
        assert_eq!(mms.value.get(), 100);
    }

    #[test]
    fn variable_width_fill_scales_with_flags() {
        let (mut fixture, _mms) = bar_data(10, 0, 50, 1, 0, BarFlags::WIDE_2X);
        let field = Bar::new(EditModel::Select, FocusStyle::PlainInvert);
        fixture.ui.y = 20;
        fixture.send(&field, Msg::Draw);
        // Frame spans max<<1 + 2 pixels, fill spans value<<1.
        assert!(fixture.gfx.ops.contains(&DrawOp::Frame { x: 0, y: 12, w: 102, h: 8 }));
        assert!(fixture.gfx.ops.contains(&DrawOp::Box { x: 1, y: 13, w: 20, h: 6 }));
    }

    #[test]
    fn fixed_width_fill_is_proportional() {
        let (mut fixture, _mms) = bar_data(25, 0, 100, 1, 40, BarFlags::NONE);
        let field = Bar::fixed_width(EditModel::Select, FocusStyle::PlainInvert);
        fixture.ui.y = 10;
        fixture.send(&field, Msg::Draw);
        assert!(fixture.gfx.ops.contains(&DrawOp::Frame { x: 0, y: 2, w: 42, h: 8 }));
        assert!(fixture.gfx.ops.contains(&DrawOp::Box { x: 1, y: 3, w: 10, h: 6 }));
    }

    #[test]
    fn frame_measurement_zeroes_the_descent() {
        let (mut fixture, _mms) = bar_data(3, 0, 9, 1, 0, BarFlags::NONE);
        let field = Bar::new(EditModel::Select, FocusStyle::PlainFrame);
        fixture.send(&field, Msg::Draw);
        let descents: Vec<&DrawOp> = fixture.gfx.ops.iter().filter(|op| matches!(op, DrawOp::Descent(_))).collect();
        // Zeroed for the frame, then restored.
        assert_eq!(descents, vec![&DrawOp::Descent(0), &DrawOp::Descent(2)]);
        let frame_after_zero = fixture
            .gfx
            .ops
            .iter()
            .skip_while(|op| **op != DrawOp::Descent(0))
            .any(|op| matches!(op, DrawOp::ButtonFrame { .. }));
        assert!(frame_after_zero);
    }

    #[test]
    fn show_value_appends_readout() {
        let (mut fixture, _mms) = bar_data(7, 0, 50, 1, 0, BarFlags::SHOW_VALUE);
        let field = Bar::new(EditModel::Select, FocusStyle::PlainInvert);
        fixture.ui.y = 30;
        fixture.send(&field, Msg::Draw);
        // Bar width 50+2, readout two pixels later.
        assert!(fixture.gfx.ops.contains(&DrawOp::Utf8 {
            x: 54,
            y: 30,
            text: "07".to_string(),
        }));
        // Composite frame covers bar + gap + readout + 1.
        assert!(
            fixture
                .gfx
                .ops
                .iter()
                .any(|op| matches!(op, DrawOp::ButtonFrame { width: 67, .. }))
        );
    }

    #[test]
    fn captured_next_prev_consume() {
        let (mut fixture, mms) = bar_data(50, 0, 100, 5, 0, BarFlags::NONE);
        let field = Bar::new(EditModel::UpDown, FocusStyle::PlainInvert);
        assert_eq!(fixture.send(&field, Msg::EventNext), Response::Pass);
        fixture.send(&field, Msg::CursorSelect);
        assert_eq!(fixture.send(&field, Msg::EventNext), Response::Consumed);
        assert_eq!(mms.value.get(), 55);
        assert_eq!(fixture.send(&field, Msg::EventPrev), Response::Consumed);
        assert_eq!(mms.value.get(), 50);
    }
}
