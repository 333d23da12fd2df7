#[macro_use]
mod common;

#[cfg(test)]
mod inheritance {
    tests! {
        inherit_methods in inheritance is OK
        "generic sound"
    }

    tests! {
        override_method in inheritance is OK
        "woof"
    }

    tests! {
        super_call in inheritance is OK
        "generic sound"
        "woof"
    }

    tests! {
        non_class_superclass in inheritance is ERR
        "Superclass must be a class."
        "[line 2]"
    }
}
