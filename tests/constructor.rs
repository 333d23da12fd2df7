#[macro_use]
mod common;

#[cfg(test)]
mod constructor {
    tests! {
        init in constructor is OK
        "123"
    }

    tests! {
        return_in_init in constructor is OK
        "Foo instance"
    }

    tests! {
        return_value_in_init in constructor is ERR
        "[line 3] Error at 'return': Cannot return a value from an initializer"
    }
}
