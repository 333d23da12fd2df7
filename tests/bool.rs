#[macro_use]
mod common;

#[cfg(test)]
mod bool {
    tests! {
        truthiness in bool is OK
        "true"
        "true"
        "false"
        "false"
        "false"
    }

    tests! {
        equality in bool is OK
        "true"
        "true"
        "false"
        "true"
        "true"
        "false"
    }
}
