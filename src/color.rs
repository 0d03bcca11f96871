macro_rules! fg_color16 {
    (default) => {
        b"\x1b[39m"
    };
    (red) => {
        b"\x1b[31m"
    };
    (green) => {
        b"\x1b[32m"
    };
    (yellow) => {
        b"\x1b[33m"
    };
    (blue) => {
        b"\x1b[34m"
    };
    (magenta) => {
        b"\x1b[35m"
    };
    (cyan) => {
        b"\x1b[36m"
    };
}
