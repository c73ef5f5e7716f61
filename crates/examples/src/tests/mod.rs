/// Tree gym tests.
mod treegym;
