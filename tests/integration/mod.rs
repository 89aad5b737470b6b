mod summary_generation;
