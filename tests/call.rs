#[macro_use]
mod common;

#[cfg(test)]
mod call {
    tests! {
        arity_too_few in call is ERR
        "Expected 2 arguments but got 1."
        "[line 4]"
    }

    tests! {
        arity_too_many in call is ERR
        "Expected 2 arguments but got 3."
        "[line 4]"
    }

    tests! {
        not_callable in call is ERR
        "Can only call functions and classes."
        "[line 2]"
    }

    tests! {
        ok in call is OK
        "3"
    }
}
