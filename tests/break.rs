#[macro_use]
mod common;

#[cfg(test)]
mod _break {
    tests! {
        while_loop in break is OK
        "0"
        "1"
        "2"
        "done"
    }

    tests! {
        for_loop in break is OK
        "0"
        "1"
    }

    tests! {
        outside in break is ERR
        "[line 1] Error at 'break': Cannot break outside of a loop"
    }
}
