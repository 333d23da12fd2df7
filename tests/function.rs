#[macro_use]
mod common;

#[cfg(test)]
mod function {
    tests! {
        print in function is OK
        "<fn add>"
    }

    tests! {
        empty_body in function is OK
        "nil"
    }

    tests! {
        recursive in function is OK
        "21"
    }

    tests! {
        too_many_params in function is ERR
        "[line 1] Error at 'a255': Cannot have more than 255 parameters"
    }
}
