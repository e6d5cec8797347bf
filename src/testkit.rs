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
//! Recording doubles for the graphics adapter and the form interpreter.
//! Fixed metrics: every glyph is 6 pixels wide, ascent is 8.

use crate::*;

pub(crate) const CHAR_W: i32 = 6;
pub(crate) const ASCENT: i32 = 8;

#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) enum DrawOp {
    Utf8 { x: i32, y: i32, text: String },
    Frame { x: i32, y: i32, w: i32, h: i32 },
    Box { x: i32, y: i32, w: i32, h: i32 },
    Button { x: i32, y: i32, flags: DrawFlags, width: i32, pad_h: i32, pad_v: i32, text: String },
    ButtonFrame { x: i32, y: i32, flags: DrawFlags, width: i32, pad_h: i32, pad_v: i32 },
    Font(FontRef),
    Descent(i32),
}

pub(crate) struct TestDisplay {
    width: i32,
    height: i32,
    descent: i32,
    pub ops: Vec<DrawOp>,
}

impl TestDisplay {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            descent: 2,
            ops: Vec::new(),
        }
    }

    pub fn buttons(&self) -> Vec<&DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Button { .. })).collect()
    }
}

impl MonoDisplay for TestDisplay {
    fn display_width(&self) -> i32 { self.width }
    fn display_height(&self) -> i32 { self.height }
    fn ascent(&self) -> i32 { ASCENT }
    fn max_char_width(&self) -> i32 { CHAR_W }
    fn utf8_width(&self, text: &str) -> i32 { text.chars().count() as i32 * CHAR_W }
    fn set_font(&mut self, font: FontRef) { self.ops.push(DrawOp::Font(font)); }
    fn draw_utf8(&mut self, x: i32, y: i32, text: &str) {
        self.ops.push(DrawOp::Utf8 { x, y, text: text.to_string() });
    }
    fn draw_frame(&mut self, r: Recti) {
        self.ops.push(DrawOp::Frame {
            x: r.x,
            y: r.y,
            w: r.width,
            h: r.height,
        });
    }
    fn draw_box(&mut self, r: Recti) {
        self.ops.push(DrawOp::Box {
            x: r.x,
            y: r.y,
            w: r.width,
            h: r.height,
        });
    }
    fn draw_button_utf8(&mut self, x: i32, y: i32, flags: DrawFlags, width: i32, pad_h: i32, pad_v: i32, text: &str) {
        self.ops.push(DrawOp::Button {
            x,
            y,
            flags,
            width,
            pad_h,
            pad_v,
            text: text.to_string(),
        });
    }
    fn draw_button_frame(&mut self, x: i32, y: i32, flags: DrawFlags, width: i32, pad_h: i32, pad_v: i32) {
        self.ops.push(DrawOp::ButtonFrame { x, y, flags, width, pad_h, pad_v });
    }
    fn replace_descent(&mut self, descent: i32) -> i32 {
        let previous = self.descent;
        self.descent = descent;
        self.ops.push(DrawOp::Descent(descent));
        previous
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) enum NavCall {
    GotoForm(u8, u8),
    GotoAuto(u8),
    SaveForm,
    RestoreForm,
    SaveCursor(u8),
    LeaveForm,
}

pub(crate) struct TestNav {
    /// `|`-tokens of the current field.
    pub tokens: Vec<String>,
    /// Selectable option texts of the parent form.
    pub options: Vec<String>,
    pub calls: Vec<NavCall>,
    pub goto_ok: bool,
}

impl TestNav {
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            options: Vec::new(),
            calls: Vec::new(),
            goto_ok: true,
        }
    }
}

impl FormNav for TestNav {
    fn fds_get_nth_token(&mut self, text: &mut String, n: u8) -> bool {
        match self.tokens.get(n as usize) {
            Some(token) => {
                text.clear();
                text.push_str(token);
                true
            }
            None => false,
        }
    }

    fn fds_get_token_count(&mut self) -> u8 { self.tokens.len().min(255) as u8 }

    fn selectable_option_text(&mut self, _fds: FdsRef, text: &mut String, index: u8) -> bool {
        match self.options.get(index as usize) {
            Some(option) => {
                text.clear();
                text.push_str(option);
                true
            }
            None => false,
        }
    }

    fn selectable_option_count(&mut self, _fds: FdsRef) -> u8 { self.options.len().min(255) as u8 }

    fn goto_form(&mut self, id: u8, cursor: u8) -> bool {
        self.calls.push(NavCall::GotoForm(id, cursor));
        self.goto_ok
    }

    fn goto_form_auto_cursor(&mut self, id: u8) -> bool {
        self.calls.push(NavCall::GotoAuto(id));
        self.goto_ok
    }

    fn save_form(&mut self) { self.calls.push(NavCall::SaveForm); }

    fn restore_form(&mut self) { self.calls.push(NavCall::RestoreForm); }

    fn save_cursor_position(&mut self, pos: u8) { self.calls.push(NavCall::SaveCursor(pos)); }

    fn leave_form(&mut self) { self.calls.push(NavCall::LeaveForm); }
}

/// Bundles the three context parts for handler tests.
pub(crate) struct Fixture {
    pub ui: UiState,
    pub nav: TestNav,
    pub gfx: TestDisplay,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            ui: UiState::default(),
            nav: TestNav::new(),
            gfx: TestDisplay::new(128, 64),
        }
    }

    pub fn with_data(data: FieldData) -> Self {
        let mut fixture = Self::new();
        fixture.ui.uif = FieldDesc::selectable(data);
        fixture
    }

    pub fn focus(mut self) -> Self {
        self.ui.dflags = FocusFlags::CURSOR_FOCUS;
        self
    }

    pub fn ctx(&mut self) -> FieldCtx<'_> {
        FieldCtx {
            ui: &mut self.ui,
            nav: &mut self.nav,
            gfx: &mut self.gfx,
        }
    }

    pub fn send(&mut self, field: &dyn Field, msg: Msg) -> Response {
        let mut ctx = self.ctx();
        field.handle(&mut ctx, msg)
    }
}
