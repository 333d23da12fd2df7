#[macro_use]
mod common;

#[cfg(test)]
mod _super {
    tests! {
        call_method in super is OK
        "hello from A and B"
    }

    tests! {
        outside_class in super is ERR
        "[line 1] Error at 'super': Cannot use 'super' outside of a class"
    }

    tests! {
        no_superclass in super is ERR
        "[line 3] Error at 'super': Cannot use 'super' in a class with no superclass"
    }

    tests! {
        undefined_method in super is ERR
        "Undefined property 'missing'."
        "[line 4]"
    }
}
