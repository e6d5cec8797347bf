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
use log::debug;

/// Non-interactive text at the field origin.
pub struct Label;

impl Field for Label {
    fn handle(&self, ctx: &mut FieldCtx<'_>, msg: Msg) -> Response {
        if msg == Msg::Draw {
            let x = ctx.scaled_x();
            let y = ctx.y();
            let label = ctx.ui.text.clone();
            ctx.gfx.draw_utf8(x, y, &label);
        }
        Response::Pass
    }
}

/// Invisible field that switches the adapter font on draw; place it before
/// the fields that should use the bound font.
pub struct FontStyle;

impl Field for FontStyle {
    fn handle(&self, ctx: &mut FieldCtx<'_>, msg: Msg) -> Response {
        if msg == Msg::Draw {
            if let Some(font) = ctx.ui.uif.data.font() {
                ctx.gfx.set_font(font);
            }
        }
        Response::Pass
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
/// Width class of a navigation button.
pub enum ButtonWidth {
    /// Sized to the label text.
    Text,
    /// Half the display width minus ten pixels.
    Half,
    /// The display width minus the left/right origin margin.
    Full,
}

/// Button that jumps to the form named by `arg`, restoring that form's saved
/// cursor position.
pub struct GotoButton {
    /// Width class.
    pub width: ButtonWidth,
    /// Visual style.
    pub style: FocusStyle,
}

impl GotoButton {
    /// Creates a goto button.
    pub fn new(width: ButtonWidth, style: FocusStyle) -> Self { Self { width, style } }
}

impl Field for GotoButton {
    fn handle(&self, ctx: &mut FieldCtx<'_>, msg: Msg) -> Response {
        match msg {
            Msg::Draw => {
                let label = ctx.ui.text.clone();
                match self.width {
                    ButtonWidth::Text => {
                        let flags = DrawFlags::HCENTER | ctx.style_flags(self.style);
                        ctx.draw_button(flags, 0, 1, &label);
                    }
                    ButtonWidth::Half => {
                        let flags = DrawFlags::HCENTER | ctx.style_flags(self.style);
                        let width = ctx.gfx.display_width() / 2 - 10;
                        ctx.draw_button(flags, width, 0, &label);
                    }
                    ButtonWidth::Full => {
                        let x = ctx.scaled_x();
                        let width = ctx.gfx.display_width() - 2 * x;
                        let pad_h = match self.style {
                            FocusStyle::FrameInvert => x - 1,
                            _ => x,
                        };
                        ctx.draw_styled_button(self.style, width, pad_h, &label);
                    }
                }
                Response::Pass
            }
            Msg::CursorSelect | Msg::ValueIncrement | Msg::ValueDecrement => {
                debug!("goto button entering form {}", ctx.ui.arg);
                Response::consumed_if(ctx.nav.goto_form_auto_cursor(ctx.ui.arg))
            }
            _ => Response::Pass,
        }
    }
}

/// Button that leaves the menu system. `arg` is stored through the optional
/// byte binding as the exit code before the form stack is saved for
/// re-entry.
pub struct ExitButton;

impl Field for ExitButton {
    fn handle(&self, ctx: &mut FieldCtx<'_>, msg: Msg) -> Response {
        match msg {
            Msg::Draw => {
                let flags = DrawFlags::HCENTER | ctx.style_flags(FocusStyle::FrameInvert);
                let label = ctx.ui.text.clone();
                ctx.draw_button(flags, 0, 1, &label);
                Response::Pass
            }
            Msg::CursorSelect | Msg::ValueIncrement | Msg::ValueDecrement => {
                if let Some(value) = ctx.ui.uif.data.u8_value() {
                    value.set(ctx.ui.arg);
                }
                debug!("exit button leaving the menu with code {}", ctx.ui.arg);
                ctx.nav.save_form();
                ctx.nav.leave_form();
                Response::Consumed
            }
            _ => Response::Pass,
        }
    }
}
