#[macro_use]
mod common;

#[cfg(test)]
mod class {
    tests! {
        empty in class is OK
        "Foo"
    }

    tests! {
        instance in class is OK
        "Foo instance"
    }

    tests! {
        method in class is OK
        "bar called"
    }

    tests! {
        inherit_self in class is ERR
        "[line 1] Error at 'Foo': A class cannot inherit from itself"
    }
}
