mod download_tests;
