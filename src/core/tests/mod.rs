mod production_tests;
