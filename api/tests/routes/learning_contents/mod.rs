mod delete_test;
mod get_test;
mod learn_test;
mod put_test;
