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
use crate::{MonoDisplay, rect};

/// Vertical padding applied to every button drawn by the field handlers.
pub const BUTTON_V_PADDING: i32 = 1;

/// Draws a checkbox square of side `size` with its bottom edge on the text
/// baseline `y`. The fill, when checked, is inset two pixels.
pub fn draw_checkbox(gfx: &mut dyn MonoDisplay, x: i32, y: i32, size: i32, checked: bool) {
    gfx.draw_frame(rect(x, y - size, size, size));
    if checked {
        let s = size - 4;
        gfx.draw_box(rect(x + 2, y - s - 2, s, s));
    }
}

/// Draws the filled square marking the selected entry of a radio list.
pub fn draw_value_mark(gfx: &mut dyn MonoDisplay, x: i32, y: i32, size: i32) { gfx.draw_box(rect(x, y - size, size, size)); }

/// Scales an x position for the target display: positions are given in
/// half-pixels on displays at least 255 pixels wide.
pub fn scaled_x(gfx: &dyn MonoDisplay, x: u8) -> i32 {
    if gfx.display_width() >= 255 { x as i32 * 2 } else { x as i32 }
}
