mod test_incidence;
