mod diag;
