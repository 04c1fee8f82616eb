pub mod indexing_run;
