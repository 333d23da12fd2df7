#[macro_use]
mod common;

#[cfg(test)]
mod number {
    tests! {
        literals in number is OK
        "123"
        "123.456"
        "0.5"
    }

    tests! {
        trailing_zero in number is OK
        "10"
        "5"
    }

    tests! {
        arithmetic in number is OK
        "3"
        "2"
        "8"
        "2.5"
    }
}
