mod signing_args_tests;
