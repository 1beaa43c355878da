//! Named glyph tables, in catalog order

// Braille patterns are generated, see `super::braille`.

pub(super) const MAIN: &[(&str, char)] = &[
    ("BLANK", ' '),
    ("LIGHT_SHADE", '░'),
    ("MEDIUM_SHADE", '▒'),
    ("DARK_SHADE", '▓'),
    ("BLOCK", '█'),
    ("SQUARE_BLACK", '■'),
    ("SQUARE_WHITE", '□'),
    ("CIRCLE_BLACK", '●'),
    ("CIRCLE_WHITE", '○'),
    ("DIAMOND_BLACK", '◆'),
    ("DIAMOND_WHITE", '◇'),
    ("TRIANGLE_UP_BLACK", '▲'),
    ("TRIANGLE_UP_WHITE", '△'),
    ("TRIANGLE_DOWN_BLACK", '▼'),
    ("TRIANGLE_DOWN_WHITE", '▽'),
    ("TRIANGLE_LEFT_BLACK", '◀'),
    ("TRIANGLE_LEFT_WHITE", '◁'),
    ("TRIANGLE_RIGHT_BLACK", '▶'),
    ("TRIANGLE_RIGHT_WHITE", '▷'),
];

pub(super) const PIPE_ASCII: &[(&str, char)] = &[
    ("HORIZONTAL", '-'),
    ("VERTICAL", '|'),
    ("TOP_LEFT", '/'),
    ("TOP_RIGHT", '\\'),
    ("CROSS", '+'),
];

pub(super) const PIPE_EXTENDED: &[(&str, char)] = &[
    ("HORIZONTAL", '─'),
    ("VERTICAL", '│'),
    ("BOTTOM_LEFT_TURN", '┌'),
    ("BOTTOM_RIGHT_TURN", '┐'),
    ("TOP_LEFT_TURN", '└'),
    ("TOP_RIGHT_TURN", '┘'),
    ("T_UP", '┴'),
    ("T_DOWN", '┬'),
    ("T_LEFT", '┤'),
    ("T_RIGHT", '├'),
    ("CROSS", '┼'),
    ("HEAVY_HORIZONTAL", '━'),
    ("HEAVY_VERTICAL", '┃'),
    ("HEAVY_BOTTOM_LEFT_TURN", '┏'),
    ("HEAVY_BOTTOM_RIGHT_TURN", '┓'),
    ("HEAVY_TOP_LEFT_TURN", '┗'),
    ("HEAVY_TOP_RIGHT_TURN", '┛'),
    ("HEAVY_T_UP", '┻'),
    ("HEAVY_T_DOWN", '┳'),
    ("HEAVY_T_LEFT", '┫'),
    ("HEAVY_T_RIGHT", '┣'),
    ("HEAVY_CROSS", '╋'),
    ("DOUBLE_HORIZONTAL", '═'),
    ("DOUBLE_VERTICAL", '║'),
    ("DOUBLE_BOTTOM_LEFT_TURN", '╔'),
    ("DOUBLE_BOTTOM_RIGHT_TURN", '╗'),
    ("DOUBLE_TOP_LEFT_TURN", '╚'),
    ("DOUBLE_TOP_RIGHT_TURN", '╝'),
    ("DOUBLE_T_UP", '╩'),
    ("DOUBLE_T_DOWN", '╦'),
    ("DOUBLE_T_LEFT", '╣'),
    ("DOUBLE_T_RIGHT", '╠'),
    ("DOUBLE_CROSS", '╬'),
    ("ROUNDED_BOTTOM_LEFT_TURN", '╭'),
    ("ROUNDED_BOTTOM_RIGHT_TURN", '╮'),
    ("ROUNDED_TOP_LEFT_TURN", '╰'),
    ("ROUNDED_TOP_RIGHT_TURN", '╯'),
    ("ROUNDED_T_UP", '┴'),
    ("ROUNDED_T_DOWN", '┬'),
    ("ROUNDED_T_LEFT", '┤'),
    ("ROUNDED_T_RIGHT", '├'),
    ("ROUNDED_CROSS", '┼'),
];

pub(super) const PIPE_BLOCKS: &[(&str, char)] = &[
    ("FULL_BLOCK", '█'),
    ("LOWER_HALF_BLOCK", '▄'),
    ("UPPER_HALF_BLOCK", '▀'),
    ("LEFT_HALF_BLOCK", '▌'),
    ("RIGHT_HALF_BLOCK", '▐'),
    ("LOWER_LEFT_QUARTER_BLOCK", '▖'),
    ("LOWER_RIGHT_QUARTER_BLOCK", '▗'),
    ("UPPER_LEFT_QUARTER_BLOCK", '▘'),
    ("UPPER_RIGHT_QUARTER_BLOCK", '▝'),
    ("LEFT_THREE_QUARTER_BLOCK", '▙'),
    ("RIGHT_THREE_QUARTER_BLOCK", '▛'),
    ("LOWER_THREE_QUARTER_BLOCK", '▟'),
    ("UPPER_THREE_QUARTER_BLOCK", '▜'),
];

pub(super) const PIPE_EXTRAS: &[(&str, char)] = &[
    ("X", '╳'),
    ("HALF_LEFT_HORIZONTAL", '╴'),
    ("HALF_TOP_VERTICAL", '╵'),
    ("HALF_RIGHT_HORIZONTAL", '╶'),
    ("HALF_BOTTOM_VERTICAL", '╷'),
    ("END_LEFT", '╼'),
    ("END_TOP", '╽'),
    ("END_RIGHT", '╾'),
    ("END_BOTTOM", '╿'),
];

pub(super) const DOTS: &[(&str, char)] = &[
    ("ELLIPSE_MIDDLE", '⋯'),
    ("ELLIPSE_VERTICAL", '⋮'),
    ("ELLIPSE_DIAGONAL_RIGHT_TO_LEFT", '⋰'),
    ("ELLIPSE_DIAGONAL_LEFT_TO_RIGHT", '⋱'),
    ("MIDDOT", '·'),
    ("BULLET", '•'),
];

pub(super) const ARROWS: &[(&str, char)] = &[
    ("UP_ARROW", '↑'),
    ("DOWN_ARROW", '↓'),
    ("LEFT_ARROW", '←'),
    ("RIGHT_ARROW", '→'),
    ("UP_DOWN_ARROW", '↕'),
    ("LEFT_RIGHT_ARROW", '↔'),
    ("NORTH_WEST_ARROW", '↖'),
    ("NORTH_EAST_ARROW", '↗'),
    ("SOUTH_EAST_ARROW", '↘'),
    ("SOUTH_WEST_ARROW", '↙'),
    ("DOUBLE_UP_ARROW", '⇑'),
    ("DOUBLE_DOWN_ARROW", '⇓'),
    ("DOUBLE_LEFT_ARROW", '⇐'),
    ("DOUBLE_RIGHT_ARROW", '⇒'),
    ("DOUBLE_LEFT_RIGHT_ARROW", '⇔'),
    ("DOUBLE_UP_DOWN_ARROW", '⇕'),
];
