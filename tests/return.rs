#[macro_use]
mod common;

#[cfg(test)]
mod _return {
    tests! {
        top_level in return is ERR
        "[line 1] Error at 'return': Cannot return from top-level code"
    }

    tests! {
        bare in return is OK
        "nil"
    }

    tests! {
        value in return is OK
        "42"
    }

    tests! {
        early in return is OK
        "positive"
        "non-positive"
    }
}
