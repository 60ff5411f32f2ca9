//! Status markers for interactive output.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub banner: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub saved: &'static str,
    pub h_separator: &'static str,
}

pub fn select(fancy_requested: bool) -> Glyphs {
    if fancy_requested {
        fancy()
    } else {
        ascii()
    }
}

fn ascii() -> Glyphs {
    Glyphs {
        banner: "",
        success: "[ok] ",
        error: "[error] ",
        warning: "[!] ",
        saved: "[saved] ",
        h_separator: "-",
    }
}

fn fancy() -> Glyphs {
    Glyphs {
        banner: "\u{1f9ec} ",
        success: "\u{2705} ",
        error: "\u{274c} ",
        warning: "\u{2757} ",
        saved: "\u{1f4be} ",
        h_separator: "-",
    }
}
