//! Glyph art for sprites.  Each picture is stamped from the top-left cell of
//! its rect and clipped to it; spaces are transparent.

pub const RACCOON: [&str; 4] = [
    "/\\_/\\",
    "(◕▀◕)",
    " ███ ",
    " ╯ ╰ ",
];

const ROBOT_A: [&str; 3] = ["╔═╦═╗", "║◉ ◉║", "╚═╩═╝"];
const ROBOT_B: [&str; 3] = ["┌─┬─┐", "│▣ ▣│", "└┴─┴┘"];
const ROBOT_C: [&str; 3] = ["╭───╮", "│● ●│", "╰┬─┬╯"];
const TRASH: [&str; 3] = ["▄▄▄▄▄", "█▓▓▓█", "█▓▓▓█"];

pub fn obstacle(variant: usize) -> &'static [&'static str] {
    match variant % 4 {
        0 => &ROBOT_A,
        1 => &ROBOT_B,
        2 => &ROBOT_C,
        _ => &TRASH,
    }
}

pub const AMMO: [&str; 2] = ["╭▲╮", "╰█╯"];

const COIN_SPIN: [char; 4] = ['◐', '◓', '◑', '◒'];

pub fn coin(frame: usize) -> [String; 2] {
    let face = COIN_SPIN[frame % COIN_SPIN.len()];
    [format!("({face})"), " ¤ ".to_string()]
}

/// Grows to full size by the middle of the animation, then fades out.
pub fn explosion(frame: usize) -> [String; 3] {
    const GLYPHS: [char; 7] = ['·', '∗', '✶', '✷', '✹', '✺', '█'];
    let half = crate::consts::EXPLOSION_FRAMES / 2;
    let stage = if frame < half {
        frame
    } else {
        (crate::consts::EXPLOSION_FRAMES - 1).saturating_sub(frame)
    };
    let g = GLYPHS[stage.min(GLYPHS.len() - 1)];
    let edge = if stage >= 3 { g } else { ' ' };
    [
        format!(" {edge}{g}{edge} "),
        format!("{edge}{g}{g}{g}{edge}"),
        format!(" {edge}{g}{edge} "),
    ]
}

pub fn key_cap(label: char) -> [String; 3] {
    [
        "┌───┐".to_string(),
        format!("│ {label} │"),
        "└───┘".to_string(),
    ]
}

pub const PORTRAIT: [&str; 12] = [
    "        /\\          /\\        ",
    "       /  \\________/  \\       ",
    "      |   ___    ___   |      ",
    "      |  (◉  )  (  ◉)  |      ",
    "      |  ▀▀▀▀▀▀▀▀▀▀▀▀  |      ",
    "       \\      ▼▼      /       ",
    "        \\    \\__/    /        ",
    "         \\__________/         ",
    "          |  ████  |          ",
    "          |  ████  |          ",
    "         /|        |\\         ",
    "        (_/        \\_)        ",
];
