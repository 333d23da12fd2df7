#[macro_use]
mod common;

#[cfg(test)]
mod misc {
    tests! {
        empty_file in misc is OK
    }

    tests! {
        precedence in misc is OK
        "14"
        "20"
        "-5"
    }

    tests! {
        unexpected_character in misc is ERR
        "[line 1] Error: Unexpected character '@'."
    }
}
