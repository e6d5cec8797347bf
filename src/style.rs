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
use crate::DrawFlags;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
/// Visual style of a field across the unselected / selected / editing states.
///
/// The plain/invert pair is meant for input elements (the value stands out in
/// edit mode through a gap and frame); the frame/invert pair is meant for
/// buttons (inversion communicates press state without the gap).
pub enum FocusStyle {
    /// Plain when unselected, inverted when selected, inverted plus widened
    /// frame while editing (`pi`).
    PlainInvert,
    /// Framed when unselected, framed and inverted when selected, framed
    /// while editing (`fi`).
    FrameInvert,
    /// Plain when unselected, framed when selected, framed and inverted
    /// while editing (`pf`).
    PlainFrame,
    /// Inverted when unselected, framed when selected, framed and inverted
    /// while editing (`if`).
    InvertFrame,
}

impl FocusStyle {
    /// Resolves the drawing flags for the given focus and editing state.
    /// Total over all inputs.
    pub fn draw_flags(self, focused: bool, editing: bool) -> DrawFlags {
        match self {
            Self::PlainInvert => match (focused, editing) {
                (false, _) => DrawFlags::NONE,
                (true, false) => DrawFlags::INVERT,
                (true, true) => DrawFlags::INVERT | DrawFlags::XFRAME,
            },
            Self::FrameInvert => match (focused, editing) {
                (false, _) => DrawFlags::FRAME,
                (true, false) => DrawFlags::FRAME | DrawFlags::INVERT,
                (true, true) => DrawFlags::FRAME,
            },
            Self::PlainFrame => match (focused, editing) {
                (false, _) => DrawFlags::NONE,
                (true, false) => DrawFlags::FRAME,
                (true, true) => DrawFlags::FRAME | DrawFlags::INVERT,
            },
            Self::InvertFrame => match (focused, editing) {
                (false, _) => DrawFlags::INVERT,
                (true, false) => DrawFlags::FRAME,
                (true, true) => DrawFlags::FRAME | DrawFlags::INVERT,
            },
        }
    }
}
