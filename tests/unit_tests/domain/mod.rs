mod interview_rules_test;
mod performance_test;
