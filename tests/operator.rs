#[macro_use]
mod common;

#[cfg(test)]
mod operator {
    tests! {
        add_type_error in operator is ERR
        "Operands must be two numbers or two strings."
        "[line 1]"
    }

    tests! {
        divide_by_zero in operator is ERR
        "Cannot divide by zero."
        "[line 1]"
    }

    tests! {
        comparison in operator is OK
        "true"
        "true"
        "true"
        "false"
    }

    tests! {
        comparison_type_error in operator is ERR
        "Operands must be numbers."
        "[line 1]"
    }

    tests! {
        negate_type_error in operator is ERR
        "Operand must be a number."
        "[line 1]"
    }

    tests! {
        not in operator is OK
        "false"
        "true"
        "true"
    }
}
