mod event_flow_tests;
