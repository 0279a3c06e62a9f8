mod fragment_set_tests;
