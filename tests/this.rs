#[macro_use]
mod common;

#[cfg(test)]
mod this {
    tests! {
        field in this is OK
        "42"
    }

    tests! {
        outside_class in this is ERR
        "[line 1] Error at 'this': Cannot use 'this' outside of a class"
    }

    tests! {
        nested_function in this is OK
        "foo value"
    }
}
