//! Integration test harness for the Lattice workspace.


mod domain_test;
mod hook_test;
mod plugin_test;
mod registry_test;
