#[macro_use]
mod common;

#[cfg(test)]
mod closure {
    tests! {
        counter in closure is OK
        "1"
        "2"
    }

    tests! {
        for_loop_capture in closure is OK
        "8"
        "15"
    }
}
