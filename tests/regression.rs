#[macro_use]
mod common;

#[cfg(test)]
mod regression {
    tests! {
        uninitialized_var in regression is ERR
        "Uninitialized variable 'a'."
        "[line 2]"
    }

    tests! {
        self_reference_initializer in regression is ERR
        "[line 3] Error at 'a': Can't read local variable in its own initializer."
    }

    tests! {
        redeclare_in_scope in regression is ERR
        "[line 3] Error at 'a': A variable is already defined with name 'a' in this scope"
    }
}
