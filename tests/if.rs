#[macro_use]
mod common;

#[cfg(test)]
mod _if {
    tests! {
        if_true in if is OK
        "then"
    }

    tests! {
        if_false in if is OK
        "else"
    }

    tests! {
        dangling_else in if is OK
        "else"
    }
}
