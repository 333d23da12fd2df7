#[macro_use]
mod common;

#[cfg(test)]
mod logical_operator {
    tests! {
        and in logical_operator is OK
        "yes"
        "false"
        "2"
    }

    tests! {
        or in logical_operator is OK
        "yes"
        "true"
        "default"
    }
}
