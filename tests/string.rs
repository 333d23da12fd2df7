#[macro_use]
mod common;

#[cfg(test)]
mod string {
    tests! {
        concat in string is OK
        "foobar"
    }

    tests! {
        equality in string is OK
        "true"
        "false"
    }

    tests! {
        unterminated in string is ERR
        "[line 1] Error: Unterminated string."
    }
}
