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
mod bar;
mod buttons;
mod list;
mod options;
mod string_edit;
mod value;

pub use bar::*;
pub use buttons::*;
pub use list::*;
pub use options::*;
pub use string_edit::*;
pub use value::*;

use crate::draw::{BUTTON_V_PADDING, scaled_x};
use crate::{DrawFlags, FocusStyle, FormNav, MonoDisplay, UiState};

/// Shared context lent to a handler for the duration of one message.
///
/// The three parts are split borrows of interpreter-owned state: the shared
/// UI block, the interpreter services and the graphics adapter. The adapter
/// is only used while handling [`crate::Msg::Draw`].
pub struct FieldCtx<'a> {
    /// Shared UI state describing the dispatched field.
    pub ui: &'a mut UiState,
    /// Interpreter services (token lookup, form transitions).
    pub nav: &'a mut dyn FormNav,
    /// Monochrome graphics adapter.
    pub gfx: &'a mut dyn MonoDisplay,
}

impl<'a> FieldCtx<'a> {
    /// Draw origin x, scaled for the target display.
    pub fn scaled_x(&self) -> i32 { scaled_x(self.gfx, self.ui.x) }

    /// Text baseline of the current field.
    pub fn y(&self) -> i32 { self.ui.y as i32 }

    /// Resolves the drawing flags of `style` for the current focus and
    /// editing state.
    pub fn style_flags(&self, style: FocusStyle) -> DrawFlags { style.draw_flags(self.ui.is_cursor_focus(), self.ui.edit_mode.is_active()) }

    /// Draws a button at the field origin with the fixed vertical padding.
    pub fn draw_button(&mut self, flags: DrawFlags, width: i32, pad_h: i32, text: &str) {
        let x = self.scaled_x();
        let y = self.y();
        self.gfx.draw_button_utf8(x, y, flags, width, pad_h, BUTTON_V_PADDING, text);
    }

    /// Draws a button styled by the focus-style resolver.
    pub fn draw_styled_button(&mut self, style: FocusStyle, width: i32, pad_h: i32, text: &str) {
        let flags = self.style_flags(style);
        self.draw_button(flags, width, pad_h, text);
    }

    /// Fetches the nth option token of the current field into the shared
    /// text slot.
    pub fn fetch_nth_token(&mut self, n: u8) -> bool { self.nav.fds_get_nth_token(&mut self.ui.text, n) }

    /// Fetches the text of the parent form's `index`th selectable option
    /// into the shared text slot.
    pub fn fetch_option_text(&mut self, index: u8) -> bool {
        let fds = self.ui.last_form_fds;
        self.nav.selectable_option_text(fds, &mut self.ui.text, index)
    }
}
