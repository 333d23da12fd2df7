#[macro_use]
mod common;

#[cfg(test)]
mod variable {
    tests! {
        define_and_use in variable is OK
        "1"
    }

    tests! {
        uninitialized_default_nil in variable is OK
        "true"
    }

    tests! {
        redefine_global in variable is OK
        "second"
    }

    tests! {
        undefined_use in variable is ERR
        "Undefined variable 'notDefined'."
        "[line 1]"
    }
}
