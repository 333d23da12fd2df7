#[macro_use]
mod common;

#[cfg(test)]
mod comment {
    tests! {
        line in comment is OK
        "ok"
    }

    tests! {
        only_comment in comment is OK
    }
}
