#[macro_use]
mod common;

#[cfg(test)]
mod field {
    tests! {
        get_and_set in field is OK
        "baz"
    }

    tests! {
        undefined in field is ERR
        "Undefined property 'bar'."
        "[line 3]"
    }

    tests! {
        not_instance in field is ERR
        "Only instances have properties."
        "[line 2]"
    }
}
